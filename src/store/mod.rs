//! Project persistence
//!
//! The lifecycle logic only needs get/list/insert/update/delete over project
//! records; backends implement [`ProjectStore`].

mod file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::schemas::{Project, ProjectStatus};

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

/// Storage-specific errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Record with this id already exists
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Stored status changed since it was read
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Underlying IO failure
    #[error("IO failure: {0}")]
    Io(String),

    /// Record could not be encoded or decoded
    #[error("Serialization failure: {0}")]
    Serialization(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage for project records
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Get a project by ID
    async fn get(&self, id: &str) -> StoreResult<Option<Project>>;

    /// List all projects, oldest first
    async fn list(&self) -> StoreResult<Vec<Project>>;

    /// Insert a new project
    async fn insert(&self, project: Project) -> StoreResult<()>;

    /// Replace a project, provided its stored status still equals `expected_status`.
    ///
    /// Returns `Conflict` when another writer changed the status in between,
    /// and `NotFound` when the record is gone.
    async fn update(&self, project: Project, expected_status: ProjectStatus) -> StoreResult<()>;

    /// Delete a project by ID
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}

fn stale_status(id: &str, expected: ProjectStatus, actual: ProjectStatus) -> StoreError {
    StoreError::Conflict(format!(
        "Project {} status changed from {} to {} while the request was in flight",
        id, expected, actual
    ))
}
