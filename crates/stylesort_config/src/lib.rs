pub mod builtin_configs;
pub mod map;
pub mod sort_config;
pub mod stylesort_rc;
pub mod stylesort_rc_config_loader;

pub use sort_config::SortConfig;
pub use stylesort_rc::*;
pub use stylesort_rc_config_loader::LoadConfigOptions;
pub use stylesort_rc_config_loader::StylesortRcConfigLoader;
