//! Schema types for projectflow
//!
//! Wire and on-disk representations shared by the HTTP API, the CLI and the stores.

mod config;
mod project;

pub use config::{Config, StorageMode};
pub use project::{Project, ProjectStatus, StatusChange};
