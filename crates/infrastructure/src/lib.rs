//! Ferrous Lookup Infrastructure Layer
pub mod catalog;
pub mod probe;

pub use catalog::HttpResolverCatalog;
pub use probe::CommandProbe;
