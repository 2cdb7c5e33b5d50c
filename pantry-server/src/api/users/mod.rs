pub mod create;
pub mod delete;
pub mod get;
pub mod inventory;
pub mod list;
pub mod recipes;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/users endpoints (mounted at /api/users)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_users).post(create::create_user))
        .route(
            "/{id}",
            get(get::get_user)
                .put(update::update_user)
                .delete(delete::delete_user),
        )
        .route("/{id}/recipes", get(recipes::list_user_recipes))
        .route(
            "/{id}/inventory",
            get(inventory::list_inventory).post(inventory::add_inventory_item),
        )
        .route(
            "/{id}/inventory/{ingredient_id}",
            axum::routing::put(inventory::update_inventory_item)
                .delete(inventory::remove_inventory_item),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_user,
        list::list_users,
        get::get_user,
        update::update_user,
        delete::delete_user,
        recipes::list_user_recipes,
        inventory::list_inventory,
        inventory::add_inventory_item,
        inventory::update_inventory_item,
        inventory::remove_inventory_item,
    ),
    components(schemas(
        crate::models::User,
        crate::models::InventoryItem,
        crate::models::InventoryItemChanges,
        create::CreateUserRequest,
        update::UpdateUserRequest,
        list::ListUsersResponse,
        recipes::UserRecipesResponse,
        recipes::SharedRecipe,
        inventory::InventoryResponse,
        inventory::InventoryEntry,
        inventory::AddInventoryItemRequest,
    ))
)]
pub struct ApiDoc;
