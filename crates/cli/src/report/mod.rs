pub mod console;

pub use console::{write_bom, ConsoleReporter};
