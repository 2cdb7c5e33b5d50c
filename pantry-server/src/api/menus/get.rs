use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::Menu;
use crate::repo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/menus/{id}",
    tag = "menus",
    params(
        ("id" = Uuid, Path, description = "Menu ID")
    ),
    responses(
        (status = 200, description = "Menu details", body = Menu),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Menu not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn get_menu(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Menu>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::menus::get(&mut conn, id)?))
}
