use crate::Region;
use serde::{Deserialize, Serialize};

/// Remote catalog of public resolvers, one JSON document per region.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Catalog origin (default: "https://public-dns.info")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl CatalogConfig {
    /// `{base_url}/nameserver/{key}.json`
    pub fn region_url(&self, region: Region) -> String {
        format!(
            "{}/nameserver/{}.json",
            self.base_url.trim_end_matches('/'),
            region.key()
        )
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "https://public-dns.info".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("ferrous-lookup/", env!("CARGO_PKG_VERSION")).to_string()
}
