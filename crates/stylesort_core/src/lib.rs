pub mod config_loader;
pub mod diagnostic;
pub mod plugin;
pub mod types;
