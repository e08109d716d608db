//! Lifecycle metadata for clients that render status badges and menus

use axum::Json;
use serde::Serialize;

use crate::domain::{
    get_state_color, get_state_description, get_valid_next_states, is_terminal_state,
    PROJECT_STATES,
};
use crate::schemas::ProjectStatus;

/// One row of the lifecycle table
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateInfo {
    pub state: ProjectStatus,
    pub description: &'static str,
    pub color: &'static str,
    pub terminal: bool,
    pub valid_next_states: Vec<ProjectStatus>,
}

impl StateInfo {
    /// Build the row for `state`
    pub fn for_state(state: ProjectStatus) -> Self {
        StateInfo {
            state,
            description: get_state_description(state.as_str()),
            color: get_state_color(state.as_str()),
            terminal: is_terminal_state(state),
            valid_next_states: get_valid_next_states(state),
        }
    }
}

/// Full lifecycle table in progression order
pub async fn list_states() -> Json<Vec<StateInfo>> {
    Json(PROJECT_STATES.iter().copied().map(StateInfo::for_state).collect())
}
