use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::Plan;
use crate::repo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/plans/{id}",
    tag = "plans",
    params(
        ("id" = Uuid, Path, description = "Plan ID")
    ),
    responses(
        (status = 200, description = "Plan details", body = Plan),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Plan not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn get_plan(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Plan>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::plans::get(&mut conn, id)?))
}
