//! REST API over the project lifecycle

mod error;
mod extract;
mod handlers;
mod router;
mod state;


pub use error::{ApiError, ApiResult, ErrorResponse};
pub use extract::ApiJson;
pub use handlers::{
    CreateProjectRequest, FromQuoteRequest, NextStatesResponse, PatchProjectRequest, StateInfo,
    TransitionRequest, TransitionResponse, UpdateProjectRequest,
};
pub use router::create_router;
pub use state::AppState;
