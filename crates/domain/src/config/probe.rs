use serde::{Deserialize, Serialize};

/// External name-resolution utility invoked once per candidate as
/// `<program> <domain> <server>`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

fn default_program() -> String {
    "nslookup".to_string()
}
