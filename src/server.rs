//! Server setup and lifecycle management

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::api::{create_router, AppState};
use crate::config::resolve_data_dir;
use crate::errors::{ProjectflowError, Result};
use crate::schemas::{Config, StorageMode};
use crate::store::{InMemoryStore, JsonFileStore, ProjectStore};

/// Build the configured storage backend
pub fn build_store(root: &Path, config: &Config) -> Arc<dyn ProjectStore> {
    match config.storage {
        StorageMode::Memory => Arc::new(InMemoryStore::new()),
        StorageMode::File => Arc::new(JsonFileStore::new(resolve_data_dir(root, config))),
    }
}

/// projectflow HTTP server
pub struct Server {
    listen_addr: SocketAddr,
    enable_cors: bool,
    store: Arc<dyn ProjectStore>,
}

impl Server {
    /// Create a new server with the given configuration
    pub fn new(config: &Config, store: Arc<dyn ProjectStore>) -> Self {
        Server {
            listen_addr: config.listen_addr,
            enable_cors: config.enable_cors,
            store,
        }
    }

    /// Run the server until Ctrl-C or SIGTERM
    pub async fn run(self) -> Result<()> {
        let app = create_router(AppState::new(self.store), self.enable_cors);

        let listener = TcpListener::bind(self.listen_addr).await?;
        tracing::info!(addr = %self.listen_addr, "projectflow listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ProjectflowError::Server(e.to_string()))?;

        tracing::info!("projectflow shutting down");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
