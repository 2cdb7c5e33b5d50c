use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::Unit;
use crate::repo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/units/{id}",
    tag = "units",
    params(
        ("id" = Uuid, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Unit details", body = Unit),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Unit not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn get_unit(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Unit>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::units::get(&mut conn, id)?))
}
