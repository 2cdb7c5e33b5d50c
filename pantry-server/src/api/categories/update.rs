use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{Category, NewCategory};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = NewCategory,
    responses(
        (status = 200, description = "Category renamed", body = Category),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 409, description = "Category name already taken", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_category(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NewCategory>,
) -> Result<Json<Category>, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::categories::update(&mut conn, id, request)?))
}
