use axum::{extract::State, http::StatusCode, Json};
use mesa_core::{ApiError, ErrorResponse};

use crate::models::{Ingredient, NewIngredient};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/ingredients",
    tag = "ingredients",
    request_body = NewIngredient,
    responses(
        (status = 201, description = "Ingredient created", body = Ingredient),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Referenced category not found", body = ErrorResponse),
        (status = 409, description = "Ingredient name already taken", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_ingredient(
    State(pool): State<AppState>,
    Json(request): Json<NewIngredient>,
) -> Result<(StatusCode, Json<Ingredient>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }

    let mut conn = pool.get()?;
    let ingredient = repo::ingredients::create(&mut conn, request)?;
    Ok((StatusCode::CREATED, Json(ingredient)))
}
