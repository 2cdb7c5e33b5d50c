use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use mesa_core::{ApiError, ErrorResponse};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{NewPlan, Plan};
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlanRequest {
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// e.g. "weekly" or "monthly"
    pub plan_type: String,
}

#[utoipa::path(
    post,
    path = "/api/plans",
    tag = "plans",
    request_body = CreatePlanRequest,
    responses(
        (status = 201, description = "Plan created", body = Plan),
        (status = 400, description = "Invalid request or date range", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_plan(
    State(pool): State<AppState>,
    Json(request): Json<CreatePlanRequest>,
) -> Result<(StatusCode, Json<Plan>), ApiError> {
    if request.plan_type.trim().is_empty() {
        return Err(ApiError::validation("plan_type cannot be empty"));
    }

    let mut conn = pool.get()?;
    let plan = repo::plans::create(
        &mut conn,
        NewPlan {
            user_id: request.user_id,
            start_date: request.start_date,
            end_date: request.end_date,
            plan_type: request.plan_type,
        },
    )?;
    Ok((StatusCode::CREATED, Json(plan)))
}
