use crate::DomainError;
use fancy_regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}$").expect("domain pattern is a valid regex")
});

/// Syntax-checked target domain.
///
/// At least one label followed by a dot, ending in an alphabetic TLD of two
/// or more characters. Trailing dots and IDN U-labels are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        if !matches!(DOMAIN_PATTERN.is_match(input), Ok(true)) {
            return Err(DomainError::InvalidDomainName(input.to_string()));
        }

        Ok(Self(Arc::from(input)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
