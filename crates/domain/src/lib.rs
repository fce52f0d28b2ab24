//! Ferrous Lookup Domain Layer
pub mod batch_policy;
pub mod batch_summary;
pub mod config;
pub mod domain_name;
pub mod errors;
pub mod lookup_outcome;
pub mod region;
pub mod resolver_candidate;

pub use batch_policy::{BatchPolicy, MAX_SUCCESS_CAP};
pub use batch_summary::{BatchState, BatchSummary};
pub use config::{CliOverrides, Config, ConfigError};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use lookup_outcome::{LookupOutcome, LookupStatus};
pub use region::{Region, RegionSelection};
pub use resolver_candidate::ResolverCandidate;
