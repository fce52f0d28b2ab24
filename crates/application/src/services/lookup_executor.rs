use crate::ports::LookupProbe;
use ferrous_lookup_domain::{
    BatchPolicy, BatchState, BatchSummary, LookupOutcome, Region, ResolverCandidate,
};
use std::slice;
use std::sync::Arc;
use tracing::{debug, info};

/// Drives one probe per candidate, strictly in order, honouring the
/// success cap of the batch policy.
pub struct LookupExecutor {
    probe: Arc<dyn LookupProbe>,
}

impl LookupExecutor {
    pub fn new(probe: Arc<dyn LookupProbe>) -> Self {
        Self { probe }
    }

    /// Start a batch over `candidates`. Nothing is probed until the returned
    /// iterator is advanced.
    pub fn run<'a>(
        &'a self,
        policy: &'a BatchPolicy,
        candidates: &'a [ResolverCandidate],
    ) -> LookupBatch<'a> {
        LookupBatch {
            probe: self.probe.as_ref(),
            policy,
            candidates: candidates.iter(),
            counted: 0,
            probed: 0,
            succeeded: 0,
            failed: 0,
            skipped: 0,
            state: BatchState::Pending,
        }
    }
}

/// Lazily produced outcomes of one batch.
///
/// Per candidate:
///   1. empty address → skipped, no outcome, no slot consumed
///   2. cap > 1 and counted successes >= cap → batch ends (`TerminatedEarly`)
///   3. otherwise the probe runs to completion
///   4. failure → failed outcome, tally untouched
///   5. success → successful outcome, tally +1 when the cap is non-zero
///
/// Step 2 deliberately requires a cap strictly above one, so a cap of one
/// never ends the batch early.
pub struct LookupBatch<'a> {
    probe: &'a dyn LookupProbe,
    policy: &'a BatchPolicy,
    candidates: slice::Iter<'a, ResolverCandidate>,
    counted: u32,
    probed: usize,
    succeeded: usize,
    failed: usize,
    skipped: usize,
    state: BatchState,
}

impl LookupBatch<'_> {
    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Successes that count toward the cap.
    pub fn counted_successes(&self) -> u32 {
        self.counted
    }

    pub fn summary(&self, region: Region) -> BatchSummary {
        BatchSummary {
            region,
            probed: self.probed,
            succeeded: self.succeeded,
            failed: self.failed,
            skipped: self.skipped,
            state: self.state,
        }
    }

    fn cap_reached(&self) -> bool {
        self.policy.allows_early_termination() && self.counted >= self.policy.success_cap
    }

    fn probe_candidate(&mut self, candidate: &ResolverCandidate) -> LookupOutcome {
        let address = Arc::clone(&candidate.address);
        self.probed += 1;

        debug!(server = %address, domain = %self.policy.target_domain, "Probing candidate");

        match self.probe.probe(&self.policy.target_domain, &address) {
            Ok(raw_output) => {
                self.succeeded += 1;
                if self.policy.is_capped() {
                    self.counted += 1;
                }
                LookupOutcome::succeeded(address, raw_output)
            }
            Err(e) => {
                self.failed += 1;
                debug!(server = %address, error = %e, "Probe failed");
                LookupOutcome::failed(address, e.to_string())
            }
        }
    }
}

impl Iterator for LookupBatch<'_> {
    type Item = LookupOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_terminal() {
            return None;
        }
        self.state = BatchState::Running;

        loop {
            let Some(candidate) = self.candidates.next() else {
                self.state = BatchState::Completed;
                return None;
            };

            if !candidate.is_probeable() {
                self.skipped += 1;
                continue;
            }

            if self.cap_reached() {
                info!(
                    cap = self.policy.success_cap,
                    probed = self.probed,
                    "Success cap reached, stopping batch"
                );
                self.state = BatchState::TerminatedEarly;
                return None;
            }

            return Some(self.probe_candidate(candidate));
        }
    }
}
