pub mod command_probe;

pub use command_probe::CommandProbe;
