//! Config schema - Configuration for projectflow

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where project records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// One JSON file per project under the data directory
    #[default]
    File,
    /// Process memory only (lost on restart)
    Memory,
}

/// Main configuration for projectflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Address the HTTP API listens on
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Storage backend
    #[serde(default)]
    pub storage: StorageMode,

    /// Override for the project data directory (default: .projectflow/projects)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            listen_addr: default_listen_addr(),
            storage: StorageMode::File,
            data_dir: None,
            enable_cors: true,
            log_json: false,
        }
    }
}
