use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{Group, GroupChanges};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = "groups",
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    request_body = GroupChanges,
    responses(
        (status = 200, description = "Group updated", body = Group),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 409, description = "Group name already taken", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_group(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<GroupChanges>,
) -> Result<Json<Group>, ApiError> {
    if request.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }
    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name cannot be empty"));
        }
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::groups::update(&mut conn, id, request)?))
}
