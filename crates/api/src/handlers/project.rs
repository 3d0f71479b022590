//! Handlers for the `/projects` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::project::{NewProject, ProjectPatch};
use folio_core::types::ProjectId;
use folio_store::repositories::{ProjectRepo, SeedOutcome};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extractors::ProjectIdPath;
use crate::middleware::admin::RequireAdmin;
use crate::response::{
    ProjectMessageResponse, ProjectResponse, ProjectsMessageResponse, ProjectsResponse,
    SeedResponse, SeedStatusResponse,
};
use crate::state::AppState;

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ProjectsResponse>> {
    let projects = ProjectRepo::list(&state.store).await?;
    Ok(Json(ProjectsResponse { projects }))
}

/// POST /api/projects
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    payload: Result<Json<NewProject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProjectMessageResponse>)> {
    let Json(input) = payload?;
    let project = ProjectRepo::create(&state.store, input, state.config.id_strategy).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProjectMessageResponse {
            message: "Project added successfully",
            project,
        }),
    ))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ProjectIdPath(id): ProjectIdPath,
) -> AppResult<Json<ProjectResponse>> {
    let project = ProjectRepo::get(&state.store, id).await?;
    Ok(Json(ProjectResponse { project }))
}

/// PUT /api/projects/{id}
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ProjectIdPath(id): ProjectIdPath,
    payload: Result<Json<ProjectPatch>, JsonRejection>,
) -> AppResult<Json<ProjectMessageResponse>> {
    let Json(patch) = payload?;
    let project = ProjectRepo::update(&state.store, id, patch).await?;
    Ok(Json(ProjectMessageResponse {
        message: "Project updated successfully",
        project,
    }))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ProjectIdPath(id): ProjectIdPath,
) -> AppResult<Json<ProjectMessageResponse>> {
    let project = ProjectRepo::delete(&state.store, id).await?;
    Ok(Json(ProjectMessageResponse {
        message: "Project deleted successfully",
        project,
    }))
}

/// POST /api/projects/reorder
///
/// Body: `{ "projectIds": [3, 1, 2] }`. Under the default lenient mode any
/// stored project missing from the list is removed.
pub async fn reorder(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<ProjectsMessageResponse>> {
    let Json(body) = payload?;
    let order = parse_project_ids(&body)?;

    let result = ProjectRepo::reorder(&state.store, &order, state.config.reorder_mode).await?;
    Ok(Json(ProjectsMessageResponse {
        message: "Projects reordered successfully",
        projects: result.projects,
    }))
}

/// POST /api/projects/init
pub async fn seed_defaults(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<SeedResponse>> {
    let response = match ProjectRepo::seed_defaults(&state.store).await? {
        SeedOutcome::Seeded { added, total } => SeedResponse::Seeded {
            message: "Default projects initialized successfully",
            added,
            total,
        },
        SeedOutcome::Skipped { count } => SeedResponse::Skipped {
            message: "Projects already exist, skipping initialization",
            count,
        },
    };
    Ok(Json(response))
}

/// GET /api/projects/init
pub async fn seed_status(State(state): State<AppState>) -> AppResult<Json<SeedStatusResponse>> {
    let status = ProjectRepo::seed_status(&state.store).await?;
    Ok(Json(SeedStatusResponse {
        message: "Current projects status",
        count: status.count,
        has_defaults: status.has_defaults,
    }))
}

fn parse_project_ids(body: &Value) -> AppResult<Vec<ProjectId>> {
    let ids = body
        .get("projectIds")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::BadRequest("projectIds must be an array".into()))?;

    ids.iter()
        .map(|id| {
            id.as_i64().ok_or_else(|| {
                AppError::BadRequest(format!("projectIds must contain integer ids, got {id}"))
            })
        })
        .collect()
}
