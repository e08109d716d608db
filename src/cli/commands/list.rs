//! List command - List projects with optional filtering

use std::path::Path;

use crate::errors::{ProjectflowError, Result};
use crate::schemas::{Project, ProjectStatus};
use crate::store::ProjectStore;

use super::{file_store, open_workspace};

/// Load the workspace's projects, keeping only `status` when given
pub async fn collect(cwd: Option<&Path>, status: Option<&str>) -> Result<Vec<Project>> {
    let filter = status
        .map(|s| {
            s.parse::<ProjectStatus>()
                .map_err(|e| ProjectflowError::wrap(e, "Invalid status filter"))
        })
        .transpose()?;

    let (root, config) = open_workspace(cwd)?;
    let projects = file_store(&root, &config).list().await?;

    Ok(match filter {
        Some(status) => projects.into_iter().filter(|p| p.status == status).collect(),
        None => projects,
    })
}

/// List projects
pub async fn run(cwd: Option<&Path>, json: bool, status: Option<&str>) -> Result<()> {
    let projects = collect(cwd, status).await?;

    if json {
        let out = serde_json::to_string_pretty(&projects)
            .map_err(|e| ProjectflowError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects.");
        return Ok(());
    }
    for project in &projects {
        println!(
            "{}  {:<18} {} ({})",
            project.id, project.status, project.name, project.client_name
        );
    }
    Ok(())
}
