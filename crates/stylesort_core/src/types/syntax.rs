use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::diagnostic_error;
use crate::types::DiagnosticError;

/// The stylesheet syntax dialect the parser should use to read input files
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
  #[default]
  Css,
  /// Comment-extended CSS superset: `//` line comments are accepted and
  /// unparseable constructs degrade to warnings instead of failures
  Scss,
}

impl Syntax {
  pub fn from_extension(extension: &str) -> Option<Syntax> {
    match extension {
      "css" => Some(Syntax::Css),
      "scss" => Some(Syntax::Scss),
      _ => None,
    }
  }
}

impl Display for Syntax {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Syntax::Css => write!(f, "css"),
      Syntax::Scss => write!(f, "scss"),
    }
  }
}

impl TryFrom<&str> for Syntax {
  type Error = DiagnosticError;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    match value {
      "css" => Ok(Syntax::Css),
      "scss" => Ok(Syntax::Scss),
      value => Err(diagnostic_error!(
        "Unknown syntax {value}, expected one of: css, scss"
      )),
    }
  }
}
