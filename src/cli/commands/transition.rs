//! Transition command - Move a project to a new status on disk

use std::path::Path;

use crate::domain::{apply_state_transition, TransitionResult};
use crate::errors::{ProjectflowError, Result};
use crate::schemas::Project;
use crate::store::ProjectStore;

use super::{file_store, open_workspace};

/// Validate and persist a status change, returning the updated project
pub async fn apply(cwd: Option<&Path>, id: &str, state: &str) -> Result<Project> {
    let (root, config) = open_workspace(cwd)?;
    let store = file_store(&root, &config);

    let project = store
        .get(id)
        .await?
        .ok_or_else(|| ProjectflowError::ProjectNotFound(id.to_string()))?;

    match apply_state_transition(&project, state) {
        TransitionResult::Success {
            previous,
            next_project,
        } => {
            store.update(next_project.clone(), previous).await?;
            tracing::info!(project_id = %id, from = %previous, to = %next_project.status, "Project transitioned");
            Ok(next_project)
        }
        TransitionResult::Error { error } => {
            tracing::warn!(project_id = %id, from = %project.status, to = %state, "Rejected transition");
            Err(ProjectflowError::StateTransition(error))
        }
    }
}

/// Move a project to `state`
pub async fn run(cwd: Option<&Path>, id: &str, state: &str) -> Result<()> {
    let project = apply(cwd, id, state).await?;
    println!("{} is now {}", project.name, project.status);
    Ok(())
}
