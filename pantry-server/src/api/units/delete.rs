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
    path = "/api/units/{id}",
    tag = "units",
    params(
        ("id" = Uuid, Path, description = "Unit ID")
    ),
    responses(
        (status = 204, description = "Unit deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Unit not found", body = ErrorResponse),
        (status = 409, description = "Unit still referenced", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn delete_unit(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::units::delete(&mut conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
