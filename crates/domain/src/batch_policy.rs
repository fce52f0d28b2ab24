use crate::{DomainError, DomainName};

/// Largest accepted success cap.
pub const MAX_SUCCESS_CAP: u32 = 1_000_000;

/// Per-batch settings handed to the lookup executor.
///
/// `success_cap == 0` means every probeable candidate is probed. Range is
/// checked here, never inside the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPolicy {
    pub target_domain: DomainName,
    pub success_cap: u32,
}

impl BatchPolicy {
    pub fn new(target_domain: DomainName, success_cap: u32) -> Result<Self, DomainError> {
        Self::validate_success_cap(success_cap)?;
        Ok(Self {
            target_domain,
            success_cap,
        })
    }

    pub fn validate_success_cap(success_cap: u32) -> Result<(), DomainError> {
        if success_cap > MAX_SUCCESS_CAP {
            return Err(DomainError::SuccessCapOutOfRange(success_cap));
        }
        Ok(())
    }

    /// Whether successful probes are tallied at all.
    pub fn is_capped(&self) -> bool {
        self.success_cap != 0
    }

    /// Early termination only kicks in for caps strictly above one; a cap of
    /// one probes every candidate.
    pub fn allows_early_termination(&self) -> bool {
        self.success_cap > 1
    }
}
