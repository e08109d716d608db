//! Configuration loading with defaults

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the workspace, falling back to defaults.
///
/// If config.json exists, it will be read and merged with defaults.
/// If it doesn't exist, default configuration is returned.
pub fn load_config(root: &Path) -> Result<Config> {
    fs::read_config(root)
}

/// Directory project records are stored in.
///
/// A relative `data_dir` in the config is taken relative to the workspace root.
pub fn resolve_data_dir(root: &Path, config: &Config) -> PathBuf {
    match &config.data_dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => root.join(dir),
        None => fs::get_projects_dir(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::StorageMode;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();
        std_fs::create_dir(temp.path().join(".projectflow")).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.storage, StorageMode::File);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".projectflow");
        std_fs::create_dir(&dir).unwrap();

        let config_content = r#"{
            "listen_addr": "0.0.0.0:3001",
            "data_dir": "records",
            "log_json": true
        }"#;
        std_fs::write(dir.join("config.json"), config_content).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.listen_addr.port(), 3001);
        assert!(config.log_json);
        // Default for unspecified field
        assert!(config.enable_cors);
        assert_eq!(resolve_data_dir(temp.path(), &config), temp.path().join("records"));
    }

    #[test]
    fn test_resolve_data_dir_default_and_absolute() {
        let root = PathBuf::from("/srv/studio");
        let mut config = Config::default();
        assert_eq!(
            resolve_data_dir(&root, &config),
            PathBuf::from("/srv/studio/.projectflow/projects")
        );

        config.data_dir = Some(PathBuf::from("/var/lib/projectflow"));
        assert_eq!(resolve_data_dir(&root, &config), PathBuf::from("/var/lib/projectflow"));
    }
}
