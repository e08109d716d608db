//! JSON-file storage: one pretty-printed record per project

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::{stale_status, ProjectStore, StoreError, StoreResult};
use crate::fs::get_project_json_path;
use crate::schemas::{Project, ProjectStatus};

/// File-backed project store rooted at a data directory
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    // Serializes read-check-write sequences within this process only
    write_lock: Mutex<()>,
}

fn io_error(e: std::io::Error) -> StoreError {
    StoreError::Io(e.to_string())
}

impl JsonFileStore {
    /// Create a store over `data_dir`; the directory is created on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Directory the records live in
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn record_path(&self, id: &str) -> Option<PathBuf> {
        // Ids are UUIDs; anything else cannot name a record (and must not name a path)
        uuid::Uuid::parse_str(id).ok()?;
        Some(get_project_json_path(&self.data_dir, id))
    }

    async fn read_record(&self, path: &Path) -> StoreResult<Option<Project>> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(e)),
        };

        serde_json::from_str(&content).map(Some).map_err(|e| {
            StoreError::Serialization(format!("Invalid JSON in file {}: {}", path.display(), e))
        })
    }

    /// Write via a temp file and rename so readers never see a partial record
    async fn write_record(&self, path: &Path, project: &Project) -> StoreResult<()> {
        let mut content = serde_json::to_string_pretty(project)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        content.push('\n');

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(io_error)?;
        }

        let temp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).await.map_err(io_error)?;
        file.write_all(content.as_bytes()).await.map_err(io_error)?;
        file.sync_all().await.map_err(io_error)?;
        drop(file);

        fs::rename(&temp_path, path).await.map_err(io_error)
    }
}

#[async_trait]
impl ProjectStore for JsonFileStore {
    async fn get(&self, id: &str) -> StoreResult<Option<Project>> {
        match self.record_path(id) {
            Some(path) => self.read_record(&path).await,
            None => Ok(None),
        }
    }

    async fn list(&self) -> StoreResult<Vec<Project>> {
        let mut entries = match fs::read_dir(&self.data_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(e)),
        };

        let mut projects = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match self.read_record(&path).await {
                Ok(Some(project)) => projects.push(project),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable project record");
                }
            }
        }
        projects.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(projects)
    }

    async fn insert(&self, project: Project) -> StoreResult<()> {
        let path = self
            .record_path(&project.id)
            .ok_or_else(|| StoreError::Serialization(format!("Invalid project id: {}", project.id)))?;

        let _guard = self.write_lock.lock().await;
        if fs::metadata(&path).await.is_ok() {
            return Err(StoreError::AlreadyExists(project.id));
        }
        self.write_record(&path, &project).await
    }

    async fn update(&self, project: Project, expected_status: ProjectStatus) -> StoreResult<()> {
        let path = self
            .record_path(&project.id)
            .ok_or_else(|| StoreError::NotFound(project.id.clone()))?;

        let _guard = self.write_lock.lock().await;
        let stored = self
            .read_record(&path)
            .await?
            .ok_or_else(|| StoreError::NotFound(project.id.clone()))?;
        if stored.status != expected_status {
            return Err(stale_status(&project.id, expected_status, stored.status));
        }
        self.write_record(&path, &project).await
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let Some(path) = self.record_path(id) else {
            return Ok(false);
        };

        let _guard = self.write_lock.lock().await;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(e)),
        }
    }
}
