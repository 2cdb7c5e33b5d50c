use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::Category;
use crate::repo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn get_category(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::categories::get(&mut conn, id)?))
}
