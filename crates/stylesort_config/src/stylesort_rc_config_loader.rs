use std::path::PathBuf;

use stylesort_core::config_loader::ConfigFile;
use stylesort_core::config_loader::ConfigLoaderRef;
use stylesort_core::diagnostic_error;
use stylesort_core::types::Diagnostic;
use stylesort_core::types::DiagnosticError;
use stylesort_core::types::ErrorKind;

use crate::builtin_configs::get_builtin_config;
use crate::builtin_configs::DEFAULT_CONFIG;
use crate::sort_config::SortConfig;
use crate::stylesort_rc::StylesortRc;
use crate::stylesort_rc::RC_FILENAME;

#[derive(Default)]
pub struct LoadConfigOptions<'a> {
  /// A builtin config name that will be used to load the config instead of
  /// searching for a .stylesortrc file
  pub config: Option<&'a str>,
}

/// Loads and validates .stylesortrc config
pub struct StylesortRcConfigLoader {
  config: ConfigLoaderRef,
}

impl StylesortRcConfigLoader {
  pub fn new(config: ConfigLoaderRef) -> Self {
    StylesortRcConfigLoader { config }
  }

  /// Loads the nearest .stylesortrc, falling back to the builtin default
  /// config when none exists
  ///
  /// Returns the validated config along with the files that contributed to
  /// it, so callers can invalidate on changes to any of them.
  pub fn load(
    &self,
    options: LoadConfigOptions<'_>,
  ) -> Result<(SortConfig, Vec<PathBuf>), DiagnosticError> {
    let rc_file: ConfigFile<StylesortRc> = match options.config {
      Some(specifier) => get_builtin_config(specifier)
        .ok_or_else(|| diagnostic_error!("Unable to resolve config {specifier}"))?,
      None => match self.config.load_json5_config::<StylesortRc>(RC_FILENAME) {
        Ok(rc_file) => rc_file,
        Err(err) => {
          let diagnostic = err.downcast_ref::<Diagnostic>();

          if diagnostic.is_some_and(|d| d.kind != ErrorKind::NotFound) {
            return Err(err);
          }

          tracing::debug!("No {RC_FILENAME} found, using builtin default config");
          get_builtin_config(DEFAULT_CONFIG).expect("builtin default config is present")
        }
      },
    };

    let config = SortConfig::try_from(&rc_file)?;

    Ok((config, vec![rc_file.path]))
  }
}
