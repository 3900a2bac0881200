use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::map::UnspecifiedPosition;

/// File name the config loader searches for in ancestor directories
pub const RC_FILENAME: &str = ".stylesortrc";

/// The plugin entry the ordering transformer reads its options from
pub const ORDER_PLUGIN_NAME: &str = "@stylesort/transformer-order";

/// Raw deserialized representation of a .stylesortrc file
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct StylesortRc {
  /// Dialect the parser should use to read input files
  pub syntax: Option<String>,

  /// Options blocks keyed by plugin name
  #[serde(default)]
  pub plugins: IndexMap<String, PluginOptions>,
}

/// Options block for a single plugin in .stylesortrc
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PluginOptions {
  /// Property names in sort priority order; earlier entries sort first
  #[serde(default, rename = "properties-order")]
  pub properties_order: Vec<String>,

  /// Placement of properties absent from the order
  #[serde(default, rename = "unspecified-properties-position")]
  pub unspecified_properties_position: UnspecifiedPosition,
}
