//! Show command - Show details of a specific project

use std::path::Path;

use crate::domain::{get_state_description, get_valid_next_states};
use crate::errors::{ProjectflowError, Result};
use crate::schemas::Project;
use crate::store::ProjectStore;

use super::{file_store, open_workspace};

/// Load one project from the workspace
pub async fn load(cwd: Option<&Path>, id: &str) -> Result<Project> {
    let (root, config) = open_workspace(cwd)?;
    file_store(&root, &config)
        .get(id)
        .await?
        .ok_or_else(|| ProjectflowError::ProjectNotFound(id.to_string()))
}

/// Show details of a project
pub async fn run(cwd: Option<&Path>, id: &str, json: bool) -> Result<()> {
    let project = load(cwd, id).await?;

    if json {
        let out = serde_json::to_string_pretty(&project)
            .map_err(|e| ProjectflowError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    println!("{} ({})", project.name, project.id);
    println!("  Client:  {}", project.client_name);
    println!(
        "  Status:  {} - {}",
        project.status,
        get_state_description(project.status.as_str())
    );
    let next: Vec<&str> = get_valid_next_states(project.status)
        .iter()
        .map(|s| s.as_str())
        .collect();
    println!("  Next:    {}", if next.is_empty() { "-".to_string() } else { next.join(", ") });
    if let Some(quote) = &project.quote_id {
        println!("  Quote:   {}", quote);
    }
    if let Some(address) = &project.site_address {
        println!("  Site:    {}", address);
    }
    for change in &project.status_history {
        println!("  {}  {} -> {}", change.changed_at, change.from, change.to);
    }
    Ok(())
}
