use async_trait::async_trait;
use ferrous_lookup_application::ports::ResolverCatalog;
use ferrous_lookup_domain::config::CatalogConfig;
use ferrous_lookup_domain::{DomainError, Region, ResolverCandidate};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, instrument};

/// Resolver catalog served over HTTP as one JSON array per region, each
/// element an object with at least an `ip` field.
pub struct HttpResolverCatalog {
    config: CatalogConfig,

    /// Persistent HTTP client, shared across region fetches.
    http_client: reqwest::Client,
}

impl HttpResolverCatalog {
    pub fn new(config: CatalogConfig) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a catalog with a preconfigured client (useful for testing)
    pub fn with_client(config: CatalogConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn region_url(&self, region: Region) -> String {
        self.config.region_url(region)
    }
}

#[async_trait]
impl ResolverCatalog for HttpResolverCatalog {
    #[instrument(skip(self, region), fields(region = region.key()))]
    async fn fetch(&self, region: Region) -> Result<Vec<ResolverCandidate>, DomainError> {
        let url = self.region_url(region);
        debug!(url = %url, "Fetching resolver catalog");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("fetch error for {}: {}", url, e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DomainError::Protocol {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("read error for {}: {}", url, e)))?;

        let candidates = decode_catalog(&body)?;
        debug!(url = %url, entries = candidates.len(), "Resolver catalog decoded");
        Ok(candidates)
    }
}

/// Decode a catalog document into candidates, preserving order.
pub fn decode_catalog(body: &str) -> Result<Vec<ResolverCandidate>, DomainError> {
    serde_json::from_str(body).map_err(|e| DomainError::Decode(e.to_string()))
}
