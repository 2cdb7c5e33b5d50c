use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::ShoppingList;
use crate::repo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/shopping-lists/{id}",
    tag = "shopping-lists",
    params(
        ("id" = Uuid, Path, description = "Shopping list ID")
    ),
    responses(
        (status = 200, description = "Shopping list details", body = ShoppingList),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Shopping list not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn get_shopping_list(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShoppingList>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::shopping_lists::get(&mut conn, id)?))
}
