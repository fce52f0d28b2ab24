use crate::Region;
use std::fmt;

/// Lifecycle of one executor run over a candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Pending,
    Running,
    Completed,
    TerminatedEarly,
}

impl BatchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::TerminatedEarly)
    }
}

impl fmt::Display for BatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::TerminatedEarly => "terminated early",
        };
        f.write_str(label)
    }
}

/// Tallies for one region's batch, reported after the last outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub region: Region,
    pub probed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub state: BatchState,
}
