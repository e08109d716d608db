//! Init command - Create a .projectflow workspace

use std::path::Path;

use crate::errors::{ProjectflowError, Result};
use crate::fs::{get_config_path, get_projects_dir, resolve_cwd, write_config};
use crate::schemas::Config;

/// Initialize a workspace in the working directory
pub async fn run(cwd: Option<&Path>, force: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config_path = get_config_path(&root);

    if config_path.exists() && !force {
        return Err(ProjectflowError::ConfigError(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    std::fs::create_dir_all(get_projects_dir(&root))?;
    write_config(&root, &Config::default())?;

    tracing::info!(root = %root.display(), "Initialized workspace");
    println!("Initialized projectflow workspace in {}", root.display());
    Ok(())
}
