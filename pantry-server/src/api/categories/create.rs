use axum::{extract::State, http::StatusCode, Json};
use mesa_core::{ApiError, ErrorResponse};

use crate::models::{Category, NewCategory};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "categories",
    request_body = NewCategory,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Category name already taken", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_category(
    State(pool): State<AppState>,
    Json(request): Json<NewCategory>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }

    let mut conn = pool.get()?;
    let category = repo::categories::create(&mut conn, request)?;
    Ok((StatusCode::CREATED, Json(category)))
}
