use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{Project, ProjectChanges};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    request_body = ProjectChanges,
    responses(
        (status = 200, description = "Project updated", body = Project),
        (status = 400, description = "Invalid request or date range", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_project(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<ProjectChanges>,
) -> Result<Json<Project>, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }
    if let Some(name) = &changes.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name cannot be empty"));
        }
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::projects::update(&mut conn, id, changes)?))
}
