use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{Menu, MenuChanges};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/menus/{id}",
    tag = "menus",
    params(
        ("id" = Uuid, Path, description = "Menu ID")
    ),
    request_body = MenuChanges,
    responses(
        (status = 200, description = "Menu updated", body = Menu),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Menu not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_menu(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<MenuChanges>,
) -> Result<Json<Menu>, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }
    if let Some(name) = &changes.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name cannot be empty"));
        }
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::menus::update(&mut conn, id, changes)?))
}
