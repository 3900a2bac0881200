use std::path::PathBuf;
use std::sync::Arc;

use crate::types::Code;
use crate::types::Syntax;

/// A single stylesheet processed by the pipeline
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Asset {
  /// Identifier of the asset within a run
  pub id: String,

  /// Path of the asset relative to the project root
  pub file_path: PathBuf,

  /// The source contents of the asset
  pub code: Arc<Code>,

  /// Dialect override; when absent the dialect is derived from the file
  /// extension, falling back to the configured syntax
  pub syntax: Option<Syntax>,

  /// Whether the asset comes from the project sources rather than a package
  pub is_source: bool,
}
