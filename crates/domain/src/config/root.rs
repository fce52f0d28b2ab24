use super::logging::LOG_LEVELS;
use super::{CatalogConfig, ConfigError, LoggingConfig, LookupConfig, OutputConfig, ProbeConfig};
use crate::{BatchPolicy, Region};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete runtime configuration.
///
/// Built from defaults, then an optional TOML file, then command-line
/// overrides, in that order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub probe: ProbeConfig,

    #[serde(default)]
    pub lookup: LookupConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line. `None` leaves the file/default value.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub count: Option<u32>,
    pub default_region: Option<Region>,
    pub catalog_url: Option<String>,
    pub probe_program: Option<String>,
    pub log_level: Option<String>,
    pub emit_bom: bool,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(count) = overrides.count {
            self.lookup.count = count;
        }
        if let Some(region) = overrides.default_region {
            self.lookup.default_region = region;
        }
        if let Some(url) = overrides.catalog_url {
            self.catalog.base_url = url;
        }
        if let Some(program) = overrides.probe_program {
            self.probe.program = program;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.emit_bom {
            self.output.emit_bom = true;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        BatchPolicy::validate_success_cap(self.lookup.count)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        let url = self.catalog.base_url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "catalog.base_url must start with http:// or https:// (got {:?})",
                self.catalog.base_url
            )));
        }

        if self.catalog.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "catalog.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.probe.program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "probe.program cannot be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {} (got {:?})",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        Ok(())
    }
}
