use super::LookupRegionUseCase;
use ferrous_lookup_domain::{BatchPolicy, BatchSummary, DomainError, Region};
use tracing::{error, instrument};

/// Use case: run the region lookup for each selected region, one after
/// another. The first region whose catalog cannot be fetched aborts the
/// remaining regions.
pub struct LookupRegionsUseCase {
    region_lookup: LookupRegionUseCase,
}

impl LookupRegionsUseCase {
    pub fn new(region_lookup: LookupRegionUseCase) -> Self {
        Self { region_lookup }
    }

    #[instrument(skip(self, regions, policy), fields(domain = %policy.target_domain, regions = regions.len()))]
    pub async fn execute(
        &self,
        regions: &[Region],
        policy: &BatchPolicy,
    ) -> Result<Vec<BatchSummary>, DomainError> {
        let mut summaries = Vec::with_capacity(regions.len());

        for &region in regions {
            match self.region_lookup.execute(region, policy).await {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    error!(region = region.key(), error = %e, "Region lookup aborted");
                    return Err(e);
                }
            }
        }

        Ok(summaries)
    }
}
