//! Configuration module for Ferrous Lookup
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `catalog`: Remote resolver catalog endpoint
//! - `probe`: External lookup utility
//! - `lookup`: Region and success cap defaults
//! - `output`: Operator-facing output encoding
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod catalog;
pub mod errors;
pub mod logging;
pub mod lookup;
pub mod output;
pub mod probe;
pub mod root;

pub use catalog::CatalogConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use lookup::LookupConfig;
pub use output::OutputConfig;
pub use probe::ProbeConfig;
pub use root::{CliOverrides, Config};
