//! Application state for API handlers

use std::sync::Arc;

use crate::store::ProjectStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Project persistence backend
    pub store: Arc<dyn ProjectStore>,

    /// Service version
    pub version: String,

    /// Service start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self {
            store,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Seconds since the service started
    pub fn uptime_seconds(&self) -> i64 {
        (chrono::Utc::now() - self.started_at).num_seconds()
    }
}
