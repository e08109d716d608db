//! Configuration loading

mod loader;

pub use loader::{load_config, resolve_data_dir};
