use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{Plan, PlanChanges};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/plans/{id}",
    tag = "plans",
    params(
        ("id" = Uuid, Path, description = "Plan ID")
    ),
    request_body = PlanChanges,
    responses(
        (status = 200, description = "Plan updated", body = Plan),
        (status = 400, description = "Invalid request or date range", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Plan not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_plan(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<PlanChanges>,
) -> Result<Json<Plan>, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }
    if let Some(plan_type) = &changes.plan_type {
        if plan_type.trim().is_empty() {
            return Err(ApiError::validation("plan_type cannot be empty"));
        }
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::plans::update(&mut conn, id, changes)?))
}
