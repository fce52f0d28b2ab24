pub mod lookup_probe;
pub mod outcome_reporter;
pub mod resolver_catalog;

pub use lookup_probe::LookupProbe;
pub use outcome_reporter::OutcomeReporter;
pub use resolver_catalog::ResolverCatalog;
