pub mod lookup_executor;

pub use lookup_executor::{LookupBatch, LookupExecutor};
