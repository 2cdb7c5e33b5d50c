use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::Project;
use crate::repo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project details", body = Project),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn get_project(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::projects::get(&mut conn, id)?))
}
