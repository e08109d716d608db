//! In-memory storage implementation

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{stale_status, ProjectStore, StoreError, StoreResult};
use crate::schemas::{Project, ProjectStatus};

/// In-memory storage for development and testing
#[derive(Debug, Default)]
pub struct InMemoryStore {
    projects: RwLock<HashMap<String, Project>>,
}

impl InMemoryStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for InMemoryStore {
    async fn get(&self, id: &str) -> StoreResult<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.get(id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Project>> {
        let projects = self.projects.read().await;
        let mut all: Vec<Project> = projects.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn insert(&self, project: Project) -> StoreResult<()> {
        let mut projects = self.projects.write().await;
        if projects.contains_key(&project.id) {
            return Err(StoreError::AlreadyExists(project.id));
        }
        projects.insert(project.id.clone(), project);
        Ok(())
    }

    async fn update(&self, project: Project, expected_status: ProjectStatus) -> StoreResult<()> {
        let mut projects = self.projects.write().await;
        let stored = projects
            .get(&project.id)
            .ok_or_else(|| StoreError::NotFound(project.id.clone()))?;
        if stored.status != expected_status {
            return Err(stale_status(&project.id, expected_status, stored.status));
        }
        projects.insert(project.id.clone(), project);
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut projects = self.projects.write().await;
        Ok(projects.remove(id).is_some())
    }
}
