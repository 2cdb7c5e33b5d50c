use axum::{
    extract::{Query, State},
    Json,
};
use mesa_core::pagination::{PageParams, PaginationMetadata};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::Employee;
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListEmployeesParams {
    /// Only employees holding this post
    pub post: Option<String>,
    /// Number of items to return (default: 20, max: 1000)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListEmployeesResponse {
    pub employees: Vec<Employee>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "employees",
    params(ListEmployeesParams),
    responses(
        (status = 200, description = "Employees ordered by name", body = ListEmployeesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_employees(
    State(pool): State<AppState>,
    Query(params): Query<ListEmployeesParams>,
) -> Result<Json<ListEmployeesResponse>, ApiError> {
    let (limit, offset) = PageParams {
        limit: params.limit,
        offset: params.offset,
    }
    .clamp();

    let mut conn = pool.get()?;
    let (employees, total) = repo::employees::list(&mut conn, params.post, limit, offset)?;

    Ok(Json(ListEmployeesResponse {
        employees,
        pagination: PaginationMetadata {
            total,
            limit,
            offset,
        },
    }))
}
