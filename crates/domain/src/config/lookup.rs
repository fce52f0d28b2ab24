use crate::Region;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Region used when no region flag is given (default: "hk")
    #[serde(default)]
    pub default_region: Region,

    /// Success cap; 0 disables it (default: 0)
    #[serde(default)]
    pub count: u32,
}
