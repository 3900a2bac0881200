use std::fmt::Display;
use std::fmt::Formatter;

use derive_builder::Builder;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::CodeFrame;
use super::ErrorKind;

/// A user-facing error for stylesort
///
/// Usually but not always this is linked to a source-code location.
#[derive(Builder, Clone, Debug, Default, Deserialize, Error, PartialEq, Serialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
  /// A summary user-facing message
  pub message: String,

  /// Machine-readable classification of the failure
  pub kind: ErrorKind,

  /// Indicates where this diagnostic was emitted from
  pub origin: Option<String>,

  /// A list of files with source-code highlights
  pub code_frames: Option<Vec<CodeFrame>>,

  /// Hints for the user
  pub hints: Option<Vec<String>>,
}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.message)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builder_defaults_unset_fields() {
    let diagnostic = DiagnosticBuilder::default()
      .message("boom")
      .build()
      .unwrap();

    assert_eq!(
      diagnostic,
      Diagnostic {
        message: String::from("boom"),
        kind: ErrorKind::Unknown,
        origin: None,
        code_frames: None,
        hints: None,
      }
    );
  }
}
