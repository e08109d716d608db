//! Property-based tests for domain logic
//!
//! These tests use proptest to verify invariants across many random inputs.

#[cfg(test)]
mod tests {
    use crate::domain::{
        apply_state_transition, can_transition, get_valid_next_states, is_terminal_state,
        validate_transition, TransitionResult, PROJECT_STATES,
    };
    use crate::schemas::{Project, ProjectStatus};
    use proptest::prelude::*;

    // ===== STRATEGY HELPERS =====

    /// Generate a random ProjectStatus
    fn any_status() -> impl Strategy<Value = ProjectStatus> {
        prop::sample::select(PROJECT_STATES.to_vec())
    }

    /// Generate a random Project
    fn any_project() -> impl Strategy<Value = Project> {
        any_status().prop_map(|status| {
            Project::new("Test Project".to_string(), "Test Client".to_string(), status)
        })
    }

    /// Upper-snake strings that are not real states
    fn bogus_state() -> impl Strategy<Value = String> {
        "[A-Z_]{1,20}".prop_filter("must not be a known state", |s| {
            s.parse::<ProjectStatus>().is_err()
        })
    }

    // ===== VALIDATOR PROPERTIES =====

    proptest! {
        /// Property: staying put is always allowed
        #[test]
        fn test_reflexive(state in any_status()) {
            prop_assert!(can_transition(state.as_str(), state.as_str()).valid);
        }

        /// Property: the validator agrees with the table for every known pair
        #[test]
        fn test_validator_matches_table(from in any_status(), to in any_status()) {
            let expected = from == to || get_valid_next_states(from).contains(&to);
            prop_assert_eq!(can_transition(from.as_str(), to.as_str()).valid, expected);
        }

        /// Property: a rejection always carries a reason, an acceptance never does
        #[test]
        fn test_reason_iff_invalid(from in any_status(), to in any_status()) {
            let result = can_transition(from.as_str(), to.as_str());
            prop_assert_eq!(result.valid, result.reason.is_none());
        }

        /// Property: nothing leaves the terminal state
        #[test]
        fn test_terminal_absorbs(to in any_status()) {
            prop_assume!(to != ProjectStatus::Closed);
            prop_assert!(is_terminal_state(ProjectStatus::Closed));
            prop_assert!(!can_transition("CLOSED", to.as_str()).valid);
        }

        /// Property: unknown targets are reported as such
        #[test]
        fn test_unknown_target_reason(from in any_status(), target in bogus_state()) {
            let result = can_transition(from.as_str(), &target);
            prop_assert!(!result.valid);
            prop_assert_eq!(result.reason, Some(format!("Invalid target state: {}", target)));
        }

        /// Property: arbitrary input never panics
        #[test]
        fn test_never_panics(current in ".*", target in ".*") {
            let _ = can_transition(&current, &target);
        }
    }

    // ===== GUARD PROPERTIES =====

    proptest! {
        /// Property: the guard reports exactly what the validator decides
        #[test]
        fn test_guard_mirrors_validator(project in any_project(), to in any_status()) {
            let check = validate_transition(&project, to.as_str());
            let result = can_transition(project.status.as_str(), to.as_str());
            prop_assert_eq!(check.valid_transition, result.valid);
            prop_assert_eq!(check.success, result.valid);
            prop_assert_eq!(check.error, result.reason);
        }

        /// Property: apply_state_transition never mutates its input
        #[test]
        fn test_apply_never_mutates(project in any_project(), to in any_status()) {
            let original = project.clone();
            let _ = apply_state_transition(&project, to.as_str());
            prop_assert_eq!(project, original);
        }

        /// Property: a successful apply lands exactly on the requested state
        #[test]
        fn test_apply_lands_on_target(project in any_project(), to in any_status()) {
            if let TransitionResult::Success { next_project: next, .. } =
                apply_state_transition(&project, to.as_str())
            {
                prop_assert_eq!(next.status, to);
                let expected_history = usize::from(project.status != to);
                prop_assert_eq!(next.status_history.len(), expected_history);
            }
        }
    }
}
