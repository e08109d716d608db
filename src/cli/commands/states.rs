//! States command - Print the lifecycle table

use crate::api::StateInfo;
use crate::domain::PROJECT_STATES;
use crate::errors::{ProjectflowError, Result};

fn render_table(rows: &[StateInfo]) -> String {
    let mut out = String::new();
    for row in rows {
        let next = if row.valid_next_states.is_empty() {
            "(terminal)".to_string()
        } else {
            row.valid_next_states
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        out.push_str(&format!(
            "{:<18} {:<40} -> {}\n",
            row.state.as_str(),
            row.description,
            next
        ));
    }
    out
}

/// Print every state with its description and allowed successors
pub async fn run(json: bool) -> Result<()> {
    let rows: Vec<StateInfo> = PROJECT_STATES.iter().copied().map(StateInfo::for_state).collect();

    if json {
        let out = serde_json::to_string_pretty(&rows)
            .map_err(|e| ProjectflowError::InvalidJson(e.to_string()))?;
        println!("{}", out);
    } else {
        print!("{}", render_table(&rows));
    }
    Ok(())
}
