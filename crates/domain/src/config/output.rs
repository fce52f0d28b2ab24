use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Write a UTF-8 byte-order mark before any other output (default: false)
    #[serde(default)]
    pub emit_bom: bool,
}
