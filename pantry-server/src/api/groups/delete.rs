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
    path = "/api/groups/{id}",
    tag = "groups",
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 409, description = "Group still has members", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn delete_group(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::groups::delete(&mut conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
