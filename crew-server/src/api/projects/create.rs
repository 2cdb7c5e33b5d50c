use axum::{extract::State, http::StatusCode, Json};
use mesa_core::{ApiError, ErrorResponse};

use crate::models::{NewProject, Project};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = NewProject,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Invalid request or date range", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_project(
    State(pool): State<AppState>,
    Json(request): Json<NewProject>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }

    let mut conn = pool.get()?;
    let project = repo::projects::create(&mut conn, request)?;
    Ok((StatusCode::CREATED, Json(project)))
}
