use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStatus {
    Succeeded { raw_output: String },
    Failed { error_detail: String },
}

/// Result of probing a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub candidate_address: Arc<str>,
    pub status: LookupStatus,
}

impl LookupOutcome {
    pub fn succeeded(candidate_address: Arc<str>, raw_output: String) -> Self {
        Self {
            candidate_address,
            status: LookupStatus::Succeeded { raw_output },
        }
    }

    pub fn failed(candidate_address: Arc<str>, error_detail: String) -> Self {
        Self {
            candidate_address,
            status: LookupStatus::Failed { error_detail },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, LookupStatus::Succeeded { .. })
    }

    pub fn raw_output(&self) -> Option<&str> {
        match &self.status {
            LookupStatus::Succeeded { raw_output } => Some(raw_output),
            LookupStatus::Failed { .. } => None,
        }
    }

    pub fn error_detail(&self) -> Option<&str> {
        match &self.status {
            LookupStatus::Failed { error_detail } => Some(error_detail),
            LookupStatus::Succeeded { .. } => None,
        }
    }
}
