use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use stylesort_filesystem::search::find_ancestor_file;
use stylesort_filesystem::FileSystemRef;

use crate::{
  diagnostic_error,
  types::{CodeFrame, CodeHighlight, DiagnosticBuilder, DiagnosticError, ErrorKind, File},
};

pub type ConfigLoaderRef = Arc<ConfigLoader>;

/// Enables config to be loaded in various formats
#[derive(Debug)]
pub struct ConfigLoader {
  pub fs: FileSystemRef,
  pub project_root: PathBuf,
  pub search_path: PathBuf,
}

#[derive(Debug, PartialEq)]
pub struct ConfigFile<T> {
  pub contents: T,
  pub path: PathBuf,
  pub raw: String,
}

impl ConfigLoader {
  /// Loads the nearest config file named `filename`, walking up from the
  /// search path to the project root
  ///
  /// Config files are parsed as JSON5 so they may carry comments and
  /// trailing commas.
  pub fn load_json5_config<Config: DeserializeOwned>(
    &self,
    filename: &str,
  ) -> Result<ConfigFile<Config>, DiagnosticError> {
    let path = find_ancestor_file(
      &*self.fs,
      &[filename],
      &self.search_path,
      &self.project_root,
    )
    .ok_or_else(|| {
      diagnostic_error!(
        DiagnosticBuilder::default()
          .kind(ErrorKind::NotFound)
          .message(format!(
            "Unable to locate {filename} config file from {}",
            self.search_path.display()
          ))
      )
    })?;

    let code = self.fs.read_to_string(&path).map_err(|source| {
      diagnostic_error!(
        DiagnosticBuilder::default()
          .message(source.to_string())
          .code_frames(vec![CodeFrame::from(path.clone())])
      )
    })?;

    let contents = serde_json5::from_str::<Config>(&code).map_err(|error| {
      json5_to_diagnostic_error(
        error,
        File {
          contents: code.clone(),
          path: path.clone(),
        },
      )
    })?;

    Ok(ConfigFile {
      contents,
      path,
      raw: code,
    })
  }
}

/// Converts a JSON5 parse failure into a diagnostic with a code frame
/// highlighting the error location when one is known
pub fn json5_to_diagnostic_error(error: serde_json5::Error, file: File) -> DiagnosticError {
  let code_highlights = match &error {
    serde_json5::Error::Message {
      location: Some(location),
      ..
    } => vec![CodeHighlight::from([location.line, location.column])],
    _ => Vec::new(),
  };

  let message = format!("Error parsing {}: {error}", file.path.display());

  diagnostic_error!(
    DiagnosticBuilder::default()
      .kind(ErrorKind::ParseError)
      .message(message)
      .code_frames(vec![CodeFrame {
        code_highlights,
        ..CodeFrame::from(file)
      }])
  )
}
