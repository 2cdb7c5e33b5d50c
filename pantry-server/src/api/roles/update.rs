use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{Role, RoleChanges};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    tag = "roles",
    params(
        ("id" = Uuid, Path, description = "Role ID")
    ),
    request_body = RoleChanges,
    responses(
        (status = 200, description = "Role updated", body = Role),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 409, description = "Role name already taken", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_role(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RoleChanges>,
) -> Result<Json<Role>, ApiError> {
    if request.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }
    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name cannot be empty"));
        }
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::roles::update(&mut conn, id, request)?))
}
