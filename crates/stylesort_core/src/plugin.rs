use std::path::PathBuf;
use std::sync::Arc;

use stylesort_filesystem::FileSystemRef;
pub use transformer_plugin::*;

use crate::config_loader::ConfigLoaderRef;
use crate::types::LogLevel;

mod transformer_plugin;

pub struct PluginContext {
  pub config: ConfigLoaderRef,
  pub file_system: FileSystemRef,
  pub logger: PluginLogger,
  pub options: Arc<PluginOptions>,
}

#[derive(Default)]
pub struct PluginLogger {}

#[derive(Debug, Default)]
pub struct PluginOptions {
  pub log_level: LogLevel,
  pub project_root: PathBuf,
}
