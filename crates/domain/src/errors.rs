use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Success cap {0} is out of range (0..={max})", max = crate::MAX_SUCCESS_CAP)]
    SuccessCapOutOfRange(u32),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Catalog request failed: {0}")]
    Transport(String),

    #[error("Catalog returned HTTP status {status}")]
    Protocol { status: u16 },

    #[error("Malformed catalog payload: {0}")]
    Decode(String),

    #[error("Probe exited unsuccessfully: {0}")]
    ProbeFailed(String),

    #[error("Probe could not be started: {0}")]
    ProbeSpawn(String),

    #[error("Lookup batch aborted: {0}")]
    BatchAborted(String),
}

impl DomainError {
    /// Network, status and payload failures while fetching a region catalog.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Protocol { .. } | Self::Decode(_)
        )
    }

    pub fn is_probe_failure(&self) -> bool {
        matches!(self, Self::ProbeFailed(_) | Self::ProbeSpawn(_))
    }
}
