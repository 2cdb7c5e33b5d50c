use axum::{extract::State, http::StatusCode, Json};
use mesa_core::{ApiError, ErrorResponse};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{NewShoppingList, ShoppingList};
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShoppingListRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub completed: bool,
}

#[utoipa::path(
    post,
    path = "/api/shopping-lists",
    tag = "shopping-lists",
    request_body = CreateShoppingListRequest,
    responses(
        (status = 201, description = "Shopping list created", body = ShoppingList),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_shopping_list(
    State(pool): State<AppState>,
    Json(request): Json<CreateShoppingListRequest>,
) -> Result<(StatusCode, Json<ShoppingList>), ApiError> {
    let mut conn = pool.get()?;
    let list = repo::shopping_lists::create(
        &mut conn,
        NewShoppingList {
            user_id: request.user_id,
            completed: request.completed,
        },
    )?;
    Ok((StatusCode::CREATED, Json(list)))
}
