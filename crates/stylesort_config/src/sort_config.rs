use stylesort_core::config_loader::ConfigFile;
use stylesort_core::diagnostic_error;
use stylesort_core::types::CodeFrame;
use stylesort_core::types::DiagnosticBuilder;
use stylesort_core::types::DiagnosticError;
use stylesort_core::types::Syntax;

use crate::map::PropertyOrderMap;
use crate::stylesort_rc::StylesortRc;
use crate::stylesort_rc::ORDER_PLUGIN_NAME;

/// Represents a fully validated .stylesortrc config
#[derive(Clone, Debug, PartialEq)]
pub struct SortConfig {
  pub syntax: Syntax,
  pub order: PropertyOrderMap,
}

impl TryFrom<&ConfigFile<StylesortRc>> for SortConfig {
  type Error = DiagnosticError;

  fn try_from(file: &ConfigFile<StylesortRc>) -> Result<Self, Self::Error> {
    let syntax = match file.contents.syntax.as_deref() {
      None => Syntax::default(),
      Some(name) => Syntax::try_from(name).map_err(|source| {
        source.context(diagnostic_error!(
          DiagnosticBuilder::default()
            .message(format!("Invalid syntax in {}", file.path.display()))
            .code_frames(vec![CodeFrame::from(file)])
        ))
      })?,
    };

    for name in file.contents.plugins.keys() {
      if name != ORDER_PLUGIN_NAME {
        tracing::warn!("Ignoring options for unknown plugin {name}");
      }
    }

    let options = file
      .contents
      .plugins
      .get(ORDER_PLUGIN_NAME)
      .ok_or_else(|| {
        diagnostic_error!(
          DiagnosticBuilder::default()
            .message(format!(
              "Missing options for plugin {ORDER_PLUGIN_NAME} in {}",
              file.path.display()
            ))
            .code_frames(vec![CodeFrame::from(file)])
        )
      })?;

    Ok(SortConfig {
      syntax,
      order: PropertyOrderMap::new(
        &options.properties_order,
        options.unspecified_properties_position,
      ),
    })
  }
}
