//! Project-level transition guard
//!
//! Pure functions that check and apply status changes to a project record.
//! Every mutating path (create, full update, partial update, the transition
//! endpoint and the CLI) goes through `validate_transition`.

use serde::Serialize;

use crate::schemas::{Project, ProjectStatus};

use super::validation::can_transition;

/// Outcome of checking a requested status change against a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionCheck {
    /// The check passed
    pub success: bool,

    /// The requested transition is allowed by the table
    pub valid_transition: bool,

    /// Validator's reason, verbatim, when the transition is rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Check whether `project` may move to `new_state`.
pub fn validate_transition(project: &Project, new_state: &str) -> TransitionCheck {
    let result = can_transition(project.status.as_str(), new_state);
    TransitionCheck {
        success: result.valid,
        valid_transition: result.valid,
        error: result.reason,
    }
}

/// Result of a state transition attempt
#[derive(Debug)]
pub enum TransitionResult {
    /// Successful transition
    Success {
        /// Status before the transition
        previous: ProjectStatus,
        /// The project with updated status, history and timestamp
        next_project: Project,
    },
    /// Failed transition with the validator's reason
    Error {
        /// Description of why the transition failed
        error: String,
    },
}

/// Pure function that applies a status transition to a project.
///
/// Never mutates the input. On success the returned project carries the new
/// status, a history entry and a fresh `updated_at`.
pub fn apply_state_transition(project: &Project, new_state: &str) -> TransitionResult {
    let check = validate_transition(project, new_state);
    if !check.valid_transition {
        return TransitionResult::Error {
            error: check
                .error
                .unwrap_or_else(|| "Transition validation failed".to_string()),
        };
    }

    // A passing check implies a known state, except for the same-state no-op
    let next_status = match new_state.parse::<ProjectStatus>() {
        Ok(status) => status,
        Err(_) => project.status,
    };

    TransitionResult::Success {
        previous: project.status,
        next_project: project.clone().with_status(next_status),
    }
}
