use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use serde_json5::from_str;
use stylesort_core::config_loader::ConfigFile;

use crate::stylesort_rc::StylesortRc;

/// Name of the builtin config carrying the curated default property order
pub const DEFAULT_CONFIG: &str = "@stylesort/config-default";

static BUILTIN_CONFIGS: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
  HashMap::from([(
    DEFAULT_CONFIG.into(),
    include_str!("../../../packages/configs/default/index.json5").into(),
  )])
});

pub fn get_builtin_config(config: &str) -> Option<ConfigFile<StylesortRc>> {
  let builtin = BUILTIN_CONFIGS.get(config)?;
  let raw_config = String::from(builtin);
  let contents =
    from_str(&raw_config).unwrap_or_else(|_| panic!("Invalid builtin config: {}", config));

  Some(ConfigFile {
    contents,
    raw: raw_config,
    path: PathBuf::from(config),
  })
}
