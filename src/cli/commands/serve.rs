//! Serve command - Run the REST API

use std::path::Path;

use crate::config::load_config;
use crate::errors::{ProjectflowError, Result};
use crate::fs::{find_workspace_root, resolve_cwd};
use crate::server::{build_store, Server};

/// Run the HTTP server until interrupted
pub async fn run(cwd: Option<&Path>, listen: Option<&str>) -> Result<()> {
    let start = resolve_cwd(cwd);
    let root = match find_workspace_root(&start) {
        Ok(root) => root,
        Err(ProjectflowError::WorkspaceNotFound(_)) => {
            tracing::warn!(
                cwd = %start.display(),
                "No .projectflow workspace found, using defaults in the working directory"
            );
            start
        }
        Err(e) => return Err(e),
    };

    let mut config = load_config(&root)?;
    if let Some(addr) = listen {
        config.listen_addr = addr
            .parse()
            .map_err(|e| ProjectflowError::ConfigError(format!("Invalid listen address {}: {}", addr, e)))?;
    }

    tracing::info!(storage = ?config.storage, root = %root.display(), "Starting server");

    let store = build_store(&root, &config);
    Server::new(&config, store).run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_serve_rejects_bad_listen_addr() {
        let temp = TempDir::new().unwrap();
        let err = run(Some(temp.path()), Some("localhost")).await.unwrap_err();
        assert!(matches!(err, ProjectflowError::ConfigError(_)));
    }
}
