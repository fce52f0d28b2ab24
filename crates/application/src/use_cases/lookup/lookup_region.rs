use crate::ports::{OutcomeReporter, ResolverCatalog};
use crate::services::LookupExecutor;
use ferrous_lookup_domain::{BatchPolicy, BatchSummary, DomainError, Region};
use std::sync::Arc;
use tracing::{info, instrument};

/// Use case: fetch one region's catalog and run a lookup batch over it.
///
/// The batch itself is blocking and runs on the blocking thread pool; every
/// outcome is handed to the reporter as soon as it is produced.
pub struct LookupRegionUseCase {
    catalog: Arc<dyn ResolverCatalog>,
    executor: Arc<LookupExecutor>,
    reporter: Arc<dyn OutcomeReporter>,
}

impl LookupRegionUseCase {
    pub fn new(
        catalog: Arc<dyn ResolverCatalog>,
        executor: Arc<LookupExecutor>,
        reporter: Arc<dyn OutcomeReporter>,
    ) -> Self {
        Self {
            catalog,
            executor,
            reporter,
        }
    }

    #[instrument(skip(self, region, policy), fields(region = region.key(), domain = %policy.target_domain))]
    pub async fn execute(
        &self,
        region: Region,
        policy: &BatchPolicy,
    ) -> Result<BatchSummary, DomainError> {
        self.reporter.batch_started(region, &policy.target_domain);

        let candidates = self.catalog.fetch(region).await?;

        info!(
            region = region.key(),
            candidates = candidates.len(),
            cap = policy.success_cap,
            "Resolver catalog fetched"
        );

        let executor = Arc::clone(&self.executor);
        let reporter = Arc::clone(&self.reporter);
        let policy = policy.clone();

        let summary = tokio::task::spawn_blocking(move || {
            let mut batch = executor.run(&policy, &candidates);
            for outcome in batch.by_ref() {
                reporter.outcome(&outcome);
            }
            batch.summary(region)
        })
        .await
        .map_err(|e| DomainError::BatchAborted(e.to_string()))?;

        info!(
            region = region.key(),
            probed = summary.probed,
            succeeded = summary.succeeded,
            failed = summary.failed,
            skipped = summary.skipped,
            state = %summary.state,
            "Lookup batch finished"
        );

        self.reporter.batch_finished(&summary);
        Ok(summary)
    }
}
