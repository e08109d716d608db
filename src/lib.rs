//! projectflow - Project lifecycle tracking for an interior-design / procurement studio
//!
//! This library provides:
//! - The project status state machine (transition table, validator, guard)
//! - Schema definitions for projects and configuration
//! - Project persistence (in-memory and JSON-file stores)
//! - The REST API enforcing the state machine on every mutating request
//! - CLI commands for local inspection and transitions

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use errors::{ProjectflowError, Result};
pub use schemas::{Config, Project, ProjectStatus};
