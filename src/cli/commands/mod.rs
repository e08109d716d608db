//! CLI command implementations

pub mod check;
pub mod init;
pub mod list;
pub mod serve;
pub mod show;
pub mod states;
pub mod transition;

use std::path::{Path, PathBuf};

use crate::config::{load_config, resolve_data_dir};
use crate::errors::Result;
use crate::fs::{find_workspace_root, resolve_cwd};
use crate::schemas::Config;
use crate::store::JsonFileStore;

/// Locate the workspace and load its config
pub(crate) fn open_workspace(cwd: Option<&Path>) -> Result<(PathBuf, Config)> {
    let root = find_workspace_root(&resolve_cwd(cwd))?;
    let config = load_config(&root)?;
    Ok((root, config))
}

/// The on-disk project store of a workspace
pub(crate) fn file_store(root: &Path, config: &Config) -> JsonFileStore {
    JsonFileStore::new(resolve_data_dir(root, config))
}
