use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{NewUnit, Unit};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/units/{id}",
    tag = "units",
    params(
        ("id" = Uuid, Path, description = "Unit ID")
    ),
    request_body = NewUnit,
    responses(
        (status = 200, description = "Unit renamed", body = Unit),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Unit not found", body = ErrorResponse),
        (status = 409, description = "Unit name already taken", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_unit(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NewUnit>,
) -> Result<Json<Unit>, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::units::update(&mut conn, id, request)?))
}
