//! Domain logic for the project lifecycle state machine

mod states;
mod transitions;
mod validation;

// Property-based tests (compiled only in test builds)
#[cfg(test)]
mod property_tests;

pub use states::{
    get_initial_state, get_state_color, get_state_description, get_state_for_quote_project,
    get_valid_next_states, is_terminal_state, transitions_from, valid_next_states_for,
    PROJECT_STATES,
};
pub use transitions::{apply_state_transition, validate_transition, TransitionCheck, TransitionResult};
pub use validation::{can_transition, check_transition, ValidationResult};
