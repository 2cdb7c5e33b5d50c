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
    path = "/api/plans/{id}",
    tag = "plans",
    params(
        ("id" = Uuid, Path, description = "Plan ID")
    ),
    responses(
        (status = 204, description = "Plan deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Plan not found", body = ErrorResponse),
        (status = 409, description = "Plan still has menus", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn delete_plan(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::plans::delete(&mut conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
