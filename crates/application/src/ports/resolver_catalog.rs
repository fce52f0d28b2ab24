use async_trait::async_trait;
use ferrous_lookup_domain::{DomainError, Region, ResolverCandidate};

/// Source of candidate resolvers for a region.
///
/// Implementations report network failures as `DomainError::Transport`,
/// non-200 responses as `DomainError::Protocol` and malformed payloads as
/// `DomainError::Decode`. Callers do not retry.
#[async_trait]
pub trait ResolverCatalog: Send + Sync {
    async fn fetch(&self, region: Region) -> Result<Vec<ResolverCandidate>, DomainError>;
}
