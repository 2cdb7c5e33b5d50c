//! Handlers for a plan's menus (/api/plans/{id}/menus).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Menu, NewMenu};
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMenuRequest {
    pub name: String,
    pub menu_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlanMenusResponse {
    pub menus: Vec<Menu>,
}

#[utoipa::path(
    post,
    path = "/api/plans/{id}/menus",
    tag = "plans",
    params(
        ("id" = Uuid, Path, description = "Plan ID")
    ),
    request_body = CreateMenuRequest,
    responses(
        (status = 201, description = "Menu created inside the plan", body = Menu),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Plan not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_plan_menu(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateMenuRequest>,
) -> Result<(StatusCode, Json<Menu>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }

    let mut conn = pool.get()?;
    let menu = repo::menus::create(
        &mut conn,
        NewMenu {
            plan_id: id,
            name: request.name,
            menu_date: request.menu_date,
        },
    )?;
    Ok((StatusCode::CREATED, Json(menu)))
}

#[utoipa::path(
    get,
    path = "/api/plans/{id}/menus",
    tag = "plans",
    params(
        ("id" = Uuid, Path, description = "Plan ID")
    ),
    responses(
        (status = 200, description = "Menus in the plan, ordered by date", body = PlanMenusResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Plan not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_plan_menus(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlanMenusResponse>, ApiError> {
    let mut conn = pool.get()?;
    let menus = repo::menus::list_for_plan(&mut conn, id)?;
    Ok(Json(PlanMenusResponse { menus }))
}
