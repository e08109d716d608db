//! API Router configuration

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the main API router
pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/states", get(handlers::list_states))
        // Projects
        .route(
            "/projects",
            get(handlers::list_projects).post(handlers::create_project),
        )
        .route("/projects/from-quote", post(handlers::create_project_from_quote))
        .route(
            "/projects/:id",
            get(handlers::get_project)
                .put(handlers::update_project)
                .patch(handlers::patch_project)
                .delete(handlers::delete_project),
        )
        .route("/projects/:id/transition", post(handlers::transition_project))
        .route("/projects/:id/next-states", get(handlers::get_next_states));

    let router = Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http());

    let router = if enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}
