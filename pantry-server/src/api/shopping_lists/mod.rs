pub mod create;
pub mod delete;
pub mod get;
pub mod items;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/shopping-lists endpoints (mounted at /api/shopping-lists)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list::list_shopping_lists).post(create::create_shopping_list),
        )
        .route(
            "/{id}",
            get(get::get_shopping_list)
                .put(update::update_shopping_list)
                .delete(delete::delete_shopping_list),
        )
        .route(
            "/{id}/items",
            get(items::list_shopping_list_items).post(items::add_shopping_list_item),
        )
        .route(
            "/{id}/items/{ingredient_id}",
            axum::routing::put(items::update_shopping_list_item)
                .delete(items::remove_shopping_list_item),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_shopping_list,
        list::list_shopping_lists,
        get::get_shopping_list,
        update::update_shopping_list,
        delete::delete_shopping_list,
        items::list_shopping_list_items,
        items::add_shopping_list_item,
        items::update_shopping_list_item,
        items::remove_shopping_list_item,
    ),
    components(schemas(
        crate::models::ShoppingList,
        crate::models::ShoppingListChanges,
        crate::models::ListIngredient,
        crate::models::ListIngredientChanges,
        create::CreateShoppingListRequest,
        list::ListShoppingListsResponse,
        items::AddListItemRequest,
        items::ListItemEntry,
        items::ListItemsResponse,
    ))
)]
pub struct ApiDoc;
