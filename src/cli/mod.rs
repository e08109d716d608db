//! CLI module for projectflow
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// projectflow - Project lifecycle tracking for interior-design and procurement work
#[derive(Parser, Debug)]
#[command(name = "projectflow")]
#[command(version)]
#[command(about = "Project lifecycle tracking: status state machine, REST API and local tooling")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "PROJECTFLOW_LOG_JSON")]
    pub json_logs: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a .projectflow workspace in the current directory
    Init {
        /// Overwrite an existing config.json
        #[arg(long)]
        force: bool,
    },

    /// Run the REST API server
    Serve {
        /// Listen address (overrides config.json)
        #[arg(short, long, env = "PROJECTFLOW_LISTEN_ADDR")]
        listen: Option<String>,
    },

    /// Print the lifecycle state table
    States {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a status transition is allowed, or list the moves out of a status
    Check {
        /// Current status (e.g. QUOTED)
        from: String,

        /// Requested status (e.g. CONTRACT_PENDING); omit to list allowed next states
        to: Option<String>,
    },

    /// List projects with optional filtering
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Filter by status (NEW, BRIEFED, ..., CLOSED)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show details of a specific project
    Show {
        /// Project ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a project to a new status
    Transition {
        /// Project ID
        id: String,

        /// Requested status
        state: String,
    },
}
