//! Check command - Ask the validator about a transition

use crate::domain::{can_transition, valid_next_states_for};
use crate::errors::{ProjectflowError, Result};

fn next_states_line(from: &str) -> String {
    let next: Vec<&str> = valid_next_states_for(from)
        .iter()
        .map(|s| s.as_str())
        .collect();
    if next.is_empty() {
        format!("{} -> (none)", from)
    } else {
        format!("{} -> {}", from, next.join(", "))
    }
}

/// Report whether `from` -> `to` is allowed; a rejection is returned as an error.
///
/// Without `to`, print the states reachable from `from`.
pub async fn run(from: &str, to: Option<&str>) -> Result<()> {
    let Some(to) = to else {
        println!("{}", next_states_line(from));
        return Ok(());
    };

    let result = can_transition(from, to);
    if !result.valid {
        return Err(ProjectflowError::StateTransition(
            result.reason.unwrap_or_else(|| "Transition validation failed".to_string()),
        ));
    }

    println!("{} -> {}: allowed", from, to);
    Ok(())
}
