use std::fmt::Debug;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::types::Asset;

#[derive(Debug, Default, PartialEq)]
pub struct TransformResult {
  pub asset: Asset,

  /// The transformer signals through this field that its result should be
  /// invalidated if these paths change.
  pub invalidate_on_file_change: Vec<PathBuf>,
}

/// Rewrite a single stylesheet asset
///
/// Transformers wrap parsers and preprocessors, and are designed to
/// integrate with the stylesort pipeline.
#[async_trait]
pub trait TransformerPlugin: Debug + Send + Sync {
  /// Transform the asset, returning its replacement
  async fn transform(&self, asset: Asset) -> Result<TransformResult, anyhow::Error>;
}
