//! File system utilities for projectflow
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config, read_json, write_config, write_json};
pub use paths::{
    find_workspace_root, get_config_path, get_project_json_path, get_projects_dir,
    get_workspace_dir, resolve_cwd, WORKSPACE_DIR,
};
