//! Path resolution utilities for projectflow
//!
//! Provides functions to locate the workspace root and construct paths
//! to the configuration file and project records.

use std::path::{Path, PathBuf};

use crate::errors::{ProjectflowError, Result};

/// Name of the workspace marker directory
pub const WORKSPACE_DIR: &str = ".projectflow";

/// Find the workspace root containing a .projectflow directory.
///
/// Walks up the directory tree from the starting directory.
///
/// # Errors
/// * `WorkspaceNotFound` - If no ancestor contains .projectflow
pub fn find_workspace_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| ProjectflowError::WorkspaceNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if current.join(WORKSPACE_DIR).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(ProjectflowError::WorkspaceNotFound(
                    "Could not find a .projectflow directory (run `projectflow init`)".to_string(),
                ));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .projectflow directory.
pub fn get_workspace_dir(root: &Path) -> PathBuf {
    root.join(WORKSPACE_DIR)
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_workspace_dir(root).join("config.json")
}

/// Get the default directory holding project records.
pub fn get_projects_dir(root: &Path) -> PathBuf {
    get_workspace_dir(root).join("projects")
}

/// Get the path to a project's record inside a data directory.
pub fn get_project_json_path(data_dir: &Path, id: &str) -> PathBuf {
    data_dir.join(format!("{}.json", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_workspace() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(WORKSPACE_DIR)).unwrap();
        temp
    }

    #[test]
    fn test_find_workspace_root_from_root() {
        let temp = setup_workspace();
        let root = find_workspace_root(temp.path()).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_workspace_root_from_subdir() {
        let temp = setup_workspace();
        let subdir = temp.path().join("clients").join("acme");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = find_workspace_root(&subdir).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_workspace_root_not_found() {
        let temp = TempDir::new().unwrap();

        let result = find_workspace_root(temp.path());
        assert!(matches!(result, Err(ProjectflowError::WorkspaceNotFound(_))));
    }

    #[test]
    fn test_paths() {
        let root = PathBuf::from("/srv/studio");
        assert_eq!(get_workspace_dir(&root), PathBuf::from("/srv/studio/.projectflow"));
        assert_eq!(get_config_path(&root), PathBuf::from("/srv/studio/.projectflow/config.json"));
        assert_eq!(get_projects_dir(&root), PathBuf::from("/srv/studio/.projectflow/projects"));
        assert_eq!(
            get_project_json_path(&get_projects_dir(&root), "abc"),
            PathBuf::from("/srv/studio/.projectflow/projects/abc.json")
        );
    }

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = PathBuf::from("/custom/path");
        assert_eq!(resolve_cwd(Some(&path)), path);
    }

    #[test]
    fn test_resolve_cwd_without_override() {
        assert!(!resolve_cwd(None).as_os_str().is_empty());
    }
}
