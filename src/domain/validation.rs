//! Validation rules for project status transitions

use crate::schemas::ProjectStatus;

use super::states::transitions_from;

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

fn format_allowed(allowed: &[ProjectStatus]) -> String {
    if allowed.is_empty() {
        return "none".to_string();
    }
    allowed
        .iter()
        .map(ProjectStatus::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate a transition between two already-parsed states.
///
/// Staying in the same state is always allowed, terminal states included.
pub fn check_transition(current: ProjectStatus, target: ProjectStatus) -> ValidationResult {
    if current == target {
        return ValidationResult::success();
    }

    let allowed = transitions_from(current);
    if !allowed.contains(&target) {
        return ValidationResult::failure(format!(
            "Cannot transition from {} to {}. Allowed transitions: {}",
            current,
            target,
            format_allowed(allowed)
        ));
    }

    ValidationResult::success()
}

/// Validate a transition between two raw state names.
///
/// Never fails loudly: unknown names come back as an invalid result with a reason.
pub fn can_transition(current: &str, target: &str) -> ValidationResult {
    if current == target {
        return ValidationResult::success();
    }

    let Ok(from) = current.parse::<ProjectStatus>() else {
        return ValidationResult::failure(format!("Invalid current state: {}", current));
    };
    let Ok(to) = target.parse::<ProjectStatus>() else {
        return ValidationResult::failure(format!("Invalid target state: {}", target));
    };

    check_transition(from, to)
}
