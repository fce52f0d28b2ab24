use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// One resolver entry from a regional catalog.
///
/// Only `address` drives the lookup. A missing or `null` `ip` field decodes
/// as an empty address, which the executor skips without probing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverCandidate {
    #[serde(rename = "ip", default, deserialize_with = "null_as_empty")]
    pub address: Arc<str>,

    #[serde(default)]
    pub name: Option<Arc<str>>,

    #[serde(default)]
    pub city: Option<Arc<str>>,

    /// Catalog-reported reliability in `0.0..=1.0`.
    #[serde(default)]
    pub reliability: Option<f64>,
}

impl ResolverCandidate {
    pub fn new(address: impl Into<Arc<str>>) -> Self {
        Self {
            address: address.into(),
            name: None,
            city: None,
            reliability: None,
        }
    }

    pub fn is_probeable(&self) -> bool {
        !self.address.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Arc<str>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(Arc::from(value.unwrap_or_default().as_str()))
}
