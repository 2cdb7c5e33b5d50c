use axum::{
    extract::{Query, State},
    Json,
};
use mesa_core::pagination::{PageParams, PaginationMetadata};
use mesa_core::{ApiError, ErrorResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Unit;
use crate::repo;
use crate::AppState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListUnitsResponse {
    pub units: Vec<Unit>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/units",
    tag = "units",
    params(PageParams),
    responses(
        (status = 200, description = "Units ordered by name", body = ListUnitsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_units(
    State(pool): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ListUnitsResponse>, ApiError> {
    let (limit, offset) = params.clamp();
    let mut conn = pool.get()?;
    let (units, total) = repo::units::list(&mut conn, limit, offset)?;

    Ok(Json(ListUnitsResponse {
        units,
        pagination: PaginationMetadata {
            total,
            limit,
            offset,
        },
    }))
}
