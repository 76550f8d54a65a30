pub mod load;
pub mod types;

pub use load::{load, load_default, DEFAULT_CONFIG_FILE};
pub use types::*;
