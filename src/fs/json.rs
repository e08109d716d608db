//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{ProjectflowError, Result};
use crate::schemas::Config;

use super::paths::get_config_path;

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProjectflowError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            ProjectflowError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        ProjectflowError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| ProjectflowError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read the config.json file for a workspace.
///
/// Returns the default config if the file doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path).map_err(|e| match e {
        ProjectflowError::InvalidJson(msg) => ProjectflowError::ConfigError(msg),
        other => other,
    })
}

/// Write the config.json file for a workspace.
pub fn write_config(root: &Path, config: &Config) -> Result<()> {
    write_json(&get_config_path(root), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Project, ProjectStatus};
    use tempfile::TempDir;

    #[test]
    fn test_read_json_file_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result: Result<Project> = read_json(&path);
        assert!(matches!(result.unwrap_err(), ProjectflowError::FileNotFound(_)));
    }

    #[test]
    fn test_read_json_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("invalid.json");
        fs::write(&path, "not valid json {").unwrap();

        let result: Result<Project> = read_json(&path);
        assert!(matches!(result.unwrap_err(), ProjectflowError::InvalidJson(_)));
    }

    #[test]
    fn test_read_json_rejects_unknown_status() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("project.json");
        let project = Project::new("A".to_string(), "B".to_string(), ProjectStatus::New);
        let json = serde_json::to_string(&project).unwrap().replace("\"NEW\"", "\"ON_HOLD\"");
        fs::write(&path, json).unwrap();

        let result: Result<Project> = read_json(&path);
        assert!(matches!(result.unwrap_err(), ProjectflowError::InvalidJson(_)));
    }

    #[test]
    fn test_write_json_creates_parent_dirs_and_no_temp_left() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("test.json");
        let project = Project::new("A".to_string(), "B".to_string(), ProjectStatus::Qa);

        write_json(&path, &project).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let read: Project = read_json(&path).unwrap();
        assert_eq!(read, project);
    }

    #[test]
    fn test_read_config_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = read_config(temp.path()).unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
    }

    #[test]
    fn test_read_config_invalid_is_config_error() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".projectflow");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("config.json"), "{\"storage\": \"postgres\"}").unwrap();

        let result = read_config(temp.path());
        assert!(matches!(result.unwrap_err(), ProjectflowError::ConfigError(_)));
    }
}
