use ferrous_lookup_domain::{BatchSummary, DomainName, LookupOutcome, Region};

/// Operator-facing sink for batch progress. Outcomes arrive in candidate
/// order, one call per probed candidate.
pub trait OutcomeReporter: Send + Sync {
    fn batch_started(&self, region: Region, domain: &DomainName);

    fn outcome(&self, outcome: &LookupOutcome);

    fn batch_finished(&self, summary: &BatchSummary);
}
