//! Project handlers
//!
//! Every path that can change `status` runs the requested value through
//! `validate_transition` before anything is persisted.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::{json_or_default, ApiJson};
use crate::api::state::AppState;
use crate::domain::{
    apply_state_transition, get_initial_state, get_state_for_quote_project,
    get_valid_next_states, validate_transition, TransitionResult,
};
use crate::schemas::{Project, ProjectStatus};

/// Create project request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    pub client_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub site_address: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    /// Explicit initial status; validated as a transition from NEW
    #[serde(default)]
    pub status: Option<String>,
}

/// Create-from-quote request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FromQuoteRequest {
    #[serde(default)]
    pub quote_id: Option<String>,
    pub name: String,
    pub client_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub site_address: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
}

/// Full update request; optional fields left out are cleared
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub name: String,
    pub client_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub site_address: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Partial update request; fields left out are unchanged
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchProjectRequest {
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub site_address: Option<String>,
    pub budget: Option<f64>,
    pub status: Option<String>,
}

/// Dedicated transition request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
    #[serde(default)]
    pub new_state: Option<String>,
}

/// Dedicated transition response
#[derive(Debug, Serialize, Deserialize)]
pub struct TransitionResponse {
    pub project: Project,
    pub message: String,
}

/// Valid next states response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextStatesResponse {
    pub current_state: ProjectStatus,
    pub valid_next_states: Vec<ProjectStatus>,
}

/// List filter
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

/// Delete response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

fn require_text(value: &str, field: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{} is required", field)));
    }
    Ok(())
}

/// Run the guard and resolve the requested status, or reject with `context: reason`.
fn checked_status(project: &Project, requested: &str, context: &str) -> ApiResult<ProjectStatus> {
    let check = validate_transition(project, requested);
    if !check.valid_transition {
        let reason = check.error.unwrap_or_default();
        tracing::warn!(
            project_id = %project.id,
            from = %project.status,
            to = %requested,
            reason = %reason,
            "Rejected status change"
        );
        return Err(ApiError::BadRequest(format!("{}: {}", context, reason)));
    }

    requested
        .parse::<ProjectStatus>()
        .map_err(ApiError::Internal)
}

async fn load_project(state: &AppState, id: &str) -> ApiResult<Project> {
    state
        .store
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project {} not found", id)))
}

/// List all projects, optionally filtered by status
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Project>>> {
    let filter = match query.status.as_deref() {
        Some(raw) => Some(
            raw.parse::<ProjectStatus>()
                .map_err(|_| ApiError::BadRequest(format!("Invalid status filter: {}", raw)))?,
        ),
        None => None,
    };

    let projects = state.store.list().await?;
    let projects = match filter {
        Some(status) => projects.into_iter().filter(|p| p.status == status).collect(),
        None => projects,
    };
    Ok(Json(projects))
}

/// Get a specific project
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Project>> {
    Ok(Json(load_project(&state, &id).await?))
}

/// Create a new project in the initial status (or a validated explicit one)
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    require_text(&request.name, "name")?;
    require_text(&request.client_name, "clientName")?;

    let initial = get_initial_state();
    let mut project = Project::new(request.name, request.client_name, initial);
    project.description = request.description;
    project.site_address = request.site_address;
    project.budget = request.budget;

    if let Some(requested) = request.status.as_deref() {
        if requested != initial.as_str() {
            project.status = checked_status(&project, requested, "Invalid initial state")?;
        }
    }

    state.store.insert(project.clone()).await?;

    tracing::info!(project_id = %project.id, status = %project.status, "Created project");

    Ok((StatusCode::CREATED, Json(project)))
}

/// Create a project from an accepted quote, skipping the pre-contract stages
pub async fn create_project_from_quote(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FromQuoteRequest>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let quote_id = match request.quote_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => return Err(ApiError::BadRequest("quoteId is required".to_string())),
    };
    require_text(&request.name, "name")?;
    require_text(&request.client_name, "clientName")?;

    let mut project = Project::new(
        request.name,
        request.client_name,
        get_state_for_quote_project(),
    )
    .with_quote(Some(quote_id));
    project.description = request.description;
    project.site_address = request.site_address;
    project.budget = request.budget;

    state.store.insert(project.clone()).await?;

    tracing::info!(
        project_id = %project.id,
        quote_id = ?project.quote_id,
        status = %project.status,
        "Created project from quote"
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// Replace a project's editable fields
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateProjectRequest>,
) -> ApiResult<Json<Project>> {
    require_text(&request.name, "name")?;
    require_text(&request.client_name, "clientName")?;

    let stored = load_project(&state, &id).await?;
    let expected = stored.status;

    let mut next = stored.clone();
    if let Some(requested) = request.status.as_deref() {
        if requested != stored.status.as_str() {
            let status = checked_status(&stored, requested, "Invalid state transition")?;
            next = next.with_status(status);
        }
    }
    next.name = request.name;
    next.client_name = request.client_name;
    next.description = request.description;
    next.site_address = request.site_address;
    next.budget = request.budget;
    let next = next.with_updated_timestamp();

    state.store.update(next.clone(), expected).await?;

    tracing::info!(project_id = %id, from = %expected, to = %next.status, "Updated project");

    Ok(Json(next))
}

/// Update only the fields present in the body
pub async fn patch_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<PatchProjectRequest>,
) -> ApiResult<Json<Project>> {
    let stored = load_project(&state, &id).await?;
    let expected = stored.status;

    let mut next = stored.clone();
    if let Some(requested) = request.status.as_deref() {
        if requested != stored.status.as_str() {
            let status = checked_status(&stored, requested, "Invalid state transition")?;
            next = next.with_status(status);
        }
    }
    if let Some(name) = request.name {
        require_text(&name, "name")?;
        next.name = name;
    }
    if let Some(client_name) = request.client_name {
        require_text(&client_name, "clientName")?;
        next.client_name = client_name;
    }
    if request.description.is_some() {
        next.description = request.description;
    }
    if request.site_address.is_some() {
        next.site_address = request.site_address;
    }
    if request.budget.is_some() {
        next.budget = request.budget;
    }
    let next = next.with_updated_timestamp();

    state.store.update(next.clone(), expected).await?;

    tracing::info!(project_id = %id, from = %expected, to = %next.status, "Patched project");

    Ok(Json(next))
}

/// Move a project to `newState`
///
/// The body is optional so that a bare POST reports the missing field.
pub async fn transition_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<TransitionResponse>> {
    let request: TransitionRequest = json_or_default(&body)?;
    let new_state = match request.new_state {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ApiError::BadRequest("newState is required".to_string())),
    };

    let stored = load_project(&state, &id).await?;

    let (previous, next) = match apply_state_transition(&stored, &new_state) {
        TransitionResult::Success {
            previous,
            next_project,
        } => (previous, next_project),
        TransitionResult::Error { error } => {
            tracing::warn!(
                project_id = %id,
                from = %stored.status,
                to = %new_state,
                reason = %error,
                "Rejected transition"
            );
            return Err(ApiError::BadRequest(error));
        }
    };

    state.store.update(next.clone(), previous).await?;

    tracing::info!(project_id = %id, from = %previous, to = %next.status, "Project transitioned");

    let message = format!("Project transitioned from {} to {}", previous, next.status);
    Ok(Json(TransitionResponse {
        project: next,
        message,
    }))
}

/// Current status and where the project may go next
pub async fn get_next_states(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<NextStatesResponse>> {
    let project = load_project(&state, &id).await?;
    Ok(Json(NextStatesResponse {
        current_state: project.status,
        valid_next_states: get_valid_next_states(project.status),
    }))
}

/// Delete a project
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state.store.delete(&id).await?;

    if deleted {
        tracing::info!(project_id = %id, "Deleted project");
    }

    Ok(Json(DeleteResponse { deleted }))
}
