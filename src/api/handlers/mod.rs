//! API request handlers

mod health;
mod projects;
mod states;

pub use health::health_check;
pub use projects::{
    create_project, create_project_from_quote, delete_project, get_next_states, get_project,
    list_projects, patch_project, transition_project, update_project, CreateProjectRequest,
    FromQuoteRequest, NextStatesResponse, PatchProjectRequest, TransitionRequest,
    TransitionResponse, UpdateProjectRequest,
};
pub use states::{list_states, StateInfo};
