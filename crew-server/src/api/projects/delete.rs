use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::repo;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 409, description = "Project still has tasks", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn delete_project(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::projects::delete(&mut conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
