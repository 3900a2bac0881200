use serde::Deserialize;
use serde::Serialize;

/// A source-code highlight within a [`super::CodeFrame`]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeHighlight {
  pub message: Option<String>,
  pub start: Location,
  pub end: Location,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Location {
  pub line: usize,
  pub column: usize,
}

impl From<[usize; 2]> for CodeHighlight {
  fn from([line, column]: [usize; 2]) -> Self {
    let location = Location { line, column };

    CodeHighlight {
      message: None,
      start: location,
      end: location,
    }
  }
}
