use axum::{
    extract::{Query, State},
    Json,
};
use mesa_core::pagination::{PageParams, PaginationMetadata};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::Plan;
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListPlansParams {
    /// Only plans belonging to this user
    pub user_id: Option<Uuid>,
    /// Exact match on the plan type
    pub plan_type: Option<String>,
    /// Number of items to return (default: 20, max: 1000)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListPlansResponse {
    pub plans: Vec<Plan>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/plans",
    tag = "plans",
    params(ListPlansParams),
    responses(
        (status = 200, description = "Plans ordered by start date, newest first", body = ListPlansResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_plans(
    State(pool): State<AppState>,
    Query(params): Query<ListPlansParams>,
) -> Result<Json<ListPlansResponse>, ApiError> {
    let (limit, offset) = PageParams {
        limit: params.limit,
        offset: params.offset,
    }
    .clamp();

    let mut conn = pool.get()?;
    let (plans, total) =
        repo::plans::list(&mut conn, params.user_id, params.plan_type, limit, offset)?;

    Ok(Json(ListPlansResponse {
        plans,
        pagination: PaginationMetadata {
            total,
            limit,
            offset,
        },
    }))
}
