//! Error types for projectflow
//!
//! Each error type has a corresponding error code for programmatic handling.
//! Transition *validation* never produces one of these: rejected transitions
//! are reported as values (see `domain::ValidationResult`).

use thiserror::Error;

use crate::store::StoreError;

/// Result type alias for projectflow operations
pub type Result<T> = std::result::Result<T, ProjectflowError>;

/// Main error type for all projectflow operations
#[derive(Debug, Error)]
pub enum ProjectflowError {
    /// Workspace not found - no .projectflow directory above the working directory
    #[error("Workspace not found: {0}")]
    WorkspaceNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Project not found
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Project status transition was rejected
    #[error("State transition error: {0}")]
    StateTransition(String),

    /// Persistence layer error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl ProjectflowError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            ProjectflowError::WorkspaceNotFound(_) => "WORKSPACE_NOT_FOUND",
            ProjectflowError::InvalidJson(_) => "INVALID_JSON",
            ProjectflowError::FileNotFound(_) => "FILE_NOT_FOUND",
            ProjectflowError::ConfigError(_) => "CONFIG_ERROR",
            ProjectflowError::ProjectNotFound(_) => "PROJECT_NOT_FOUND",
            ProjectflowError::StateTransition(_) => "STATE_TRANSITION",
            ProjectflowError::Store(_) => "STORE_ERROR",
            ProjectflowError::Server(_) => "SERVER_ERROR",
            ProjectflowError::Io(_) => "IO_ERROR",
            ProjectflowError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        ProjectflowError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &ProjectflowError) -> i32 {
    match error {
        ProjectflowError::StateTransition(_) => 2,
        ProjectflowError::ConfigError(_) => 78, // EX_CONFIG
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ProjectflowError::WorkspaceNotFound("x".into()).code(), "WORKSPACE_NOT_FOUND");
        assert_eq!(ProjectflowError::InvalidJson("x".into()).code(), "INVALID_JSON");
        assert_eq!(ProjectflowError::FileNotFound("x".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(ProjectflowError::ConfigError("x".into()).code(), "CONFIG_ERROR");
        assert_eq!(ProjectflowError::ProjectNotFound("x".into()).code(), "PROJECT_NOT_FOUND");
        assert_eq!(ProjectflowError::StateTransition("x".into()).code(), "STATE_TRANSITION");
        assert_eq!(ProjectflowError::Server("x".into()).code(), "SERVER_ERROR");
        assert_eq!(
            ProjectflowError::Store(StoreError::NotFound("x".into())).code(),
            "STORE_ERROR"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&ProjectflowError::StateTransition("x".into())), 2);
        assert_eq!(to_exit_code(&ProjectflowError::ConfigError("x".into())), 78);
        assert_eq!(to_exit_code(&ProjectflowError::ProjectNotFound("x".into())), 1);
    }

    #[test]
    fn test_wrap_error() {
        let wrapped = ProjectflowError::wrap("inner error", "outer context");
        assert_eq!(wrapped.code(), "WRAPPED_ERROR");
        assert!(wrapped.to_string().contains("outer context"));
        assert!(wrapped.to_string().contains("inner error"));
    }

    #[test]
    fn test_store_error_converts() {
        let err: ProjectflowError = StoreError::Conflict("stale".into()).into();
        assert!(err.to_string().contains("stale"));
    }
}
