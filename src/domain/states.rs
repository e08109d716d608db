//! Project lifecycle state machine definitions
//!
//! The lifecycle is mostly linear, with three short rework loops:
//! NEW → BRIEFED → QUOTED → CONTRACT_PENDING → CONTRACT_SIGNED → READY_TO_START
//! → IN_PROGRESS → QA → COMPLETED → CLOSED
//!
//! CONTRACT_PENDING may fall back to QUOTED, IN_PROGRESS to READY_TO_START,
//! and QA to IN_PROGRESS. CLOSED is terminal.

use crate::schemas::ProjectStatus;

type S = ProjectStatus;

/// The canonical ordering of project states.
pub const PROJECT_STATES: &[ProjectStatus] = &[
    S::New,
    S::Briefed,
    S::Quoted,
    S::ContractPending,
    S::ContractSigned,
    S::ReadyToStart,
    S::InProgress,
    S::Qa,
    S::Completed,
    S::Closed,
];

/// Allowed one-step successors of `state`, in table order.
///
/// This is the transition table. It is compiled in and never changes at runtime.
pub fn transitions_from(state: ProjectStatus) -> &'static [ProjectStatus] {
    match state {
        S::New => &[S::Briefed],
        S::Briefed => &[S::Quoted],
        S::Quoted => &[S::ContractPending],
        S::ContractPending => &[S::ContractSigned, S::Quoted],
        S::ContractSigned => &[S::ReadyToStart],
        S::ReadyToStart => &[S::InProgress],
        S::InProgress => &[S::Qa, S::ReadyToStart],
        S::Qa => &[S::InProgress, S::Completed],
        S::Completed => &[S::Closed],
        S::Closed => &[],
    }
}

/// Returns the allowed next states for a given current state.
pub fn get_valid_next_states(state: ProjectStatus) -> Vec<ProjectStatus> {
    transitions_from(state).to_vec()
}

/// String form of [`get_valid_next_states`]; unknown states have no successors.
pub fn valid_next_states_for(state: &str) -> Vec<ProjectStatus> {
    state
        .parse::<ProjectStatus>()
        .map(get_valid_next_states)
        .unwrap_or_default()
}

/// Check if a state is the terminal state (closed).
pub fn is_terminal_state(state: ProjectStatus) -> bool {
    state == S::Closed
}

/// Status assigned to a freshly created project.
pub fn get_initial_state() -> ProjectStatus {
    S::New
}

/// Status assigned to a project instantiated from an already-accepted quote.
pub fn get_state_for_quote_project() -> ProjectStatus {
    S::ContractSigned
}

/// Human-readable description of a state, for display only.
pub fn get_state_description(state: &str) -> &'static str {
    match state.parse::<ProjectStatus>() {
        Ok(S::New) => "New project, awaiting client brief",
        Ok(S::Briefed) => "Client brief received",
        Ok(S::Quoted) => "Quotation sent to client",
        Ok(S::ContractPending) => "Contract sent, awaiting signature",
        Ok(S::ContractSigned) => "Contract signed by client",
        Ok(S::ReadyToStart) => "Ready to start on site",
        Ok(S::InProgress) => "Work in progress",
        Ok(S::Qa) => "Quality inspection",
        Ok(S::Completed) => "Work completed and handed over",
        Ok(S::Closed) => "Project closed",
        Err(_) => "Unknown state",
    }
}

/// Display color (hex) for a state badge.
pub fn get_state_color(state: &str) -> &'static str {
    match state.parse::<ProjectStatus>() {
        Ok(S::New) => "#9ca3af",
        Ok(S::Briefed) => "#60a5fa",
        Ok(S::Quoted) => "#818cf8",
        Ok(S::ContractPending) => "#fbbf24",
        Ok(S::ContractSigned) => "#34d399",
        Ok(S::ReadyToStart) => "#2dd4bf",
        Ok(S::InProgress) => "#3b82f6",
        Ok(S::Qa) => "#f97316",
        Ok(S::Completed) => "#22c55e",
        Ok(S::Closed) => "#4b5563",
        Err(_) => "#6b7280",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_states_order() {
        assert_eq!(PROJECT_STATES.len(), 10);
        assert_eq!(PROJECT_STATES[0], S::New);
        assert_eq!(PROJECT_STATES[3], S::ContractPending);
        assert_eq!(PROJECT_STATES[7], S::Qa);
        assert_eq!(PROJECT_STATES[9], S::Closed);
    }

    #[test]
    fn test_every_non_terminal_state_has_a_successor() {
        for &state in PROJECT_STATES {
            if state == S::Closed {
                assert!(transitions_from(state).is_empty());
            } else {
                assert!(!transitions_from(state).is_empty(), "{} has no successor", state);
            }
        }
    }

    #[test]
    fn test_get_valid_next_states() {
        assert_eq!(get_valid_next_states(S::New), vec![S::Briefed]);
        assert_eq!(
            get_valid_next_states(S::ContractPending),
            vec![S::ContractSigned, S::Quoted]
        );
        assert_eq!(get_valid_next_states(S::InProgress), vec![S::Qa, S::ReadyToStart]);
        assert_eq!(get_valid_next_states(S::Qa), vec![S::InProgress, S::Completed]);
        assert_eq!(get_valid_next_states(S::Closed), vec![]);
    }

    #[test]
    fn test_valid_next_states_for_unknown() {
        assert!(valid_next_states_for("NOT_A_REAL_STATE").is_empty());
        assert_eq!(valid_next_states_for("COMPLETED"), vec![S::Closed]);
    }

    #[test]
    fn test_is_terminal_state() {
        for &state in PROJECT_STATES {
            assert_eq!(is_terminal_state(state), state == S::Closed);
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(get_initial_state().to_string(), "NEW");
        assert_eq!(get_state_for_quote_project().to_string(), "CONTRACT_SIGNED");
    }

    #[test]
    fn test_every_state_reachable_from_new() {
        let mut seen = vec![S::New];
        let mut frontier = vec![S::New];
        while let Some(state) = frontier.pop() {
            for &next in transitions_from(state) {
                if !seen.contains(&next) {
                    seen.push(next);
                    frontier.push(next);
                }
            }
        }
        assert_eq!(seen.len(), PROJECT_STATES.len());
    }

    #[test]
    fn test_presentation_fallbacks() {
        assert_eq!(get_state_description("QA"), "Quality inspection");
        assert_eq!(get_state_description("bogus"), "Unknown state");
        assert_eq!(get_state_color("bogus"), "#6b7280");
        for &state in PROJECT_STATES {
            assert_ne!(get_state_description(state.as_str()), "Unknown state");
            assert!(get_state_color(state.as_str()).starts_with('#'));
        }
    }
}
