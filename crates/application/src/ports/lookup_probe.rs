use ferrous_lookup_domain::{DomainError, DomainName};

/// One blocking name-resolution attempt of `domain` against `server`.
///
/// Returns the probe's captured output on success. Any error is treated as
/// a failure of that single candidate.
pub trait LookupProbe: Send + Sync {
    fn probe(&self, domain: &DomainName, server: &str) -> Result<String, DomainError>;
}

impl<F> LookupProbe for F
where
    F: Fn(&DomainName, &str) -> Result<String, DomainError> + Send + Sync,
{
    fn probe(&self, domain: &DomainName, server: &str) -> Result<String, DomainError> {
        self(domain, server)
    }
}
