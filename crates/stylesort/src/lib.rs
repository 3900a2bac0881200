pub use stylesort::*;
pub use stylesort_config as config;
pub use stylesort_filesystem as file_system;

pub mod stylesort;
