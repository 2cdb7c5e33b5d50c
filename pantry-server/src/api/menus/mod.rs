pub mod delete;
pub mod get;
pub mod recipes;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/menus endpoints (mounted at /api/menus).
/// Menu creation lives under /api/plans/{id}/menus since a menu never exists
/// outside a plan.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(get::get_menu)
                .put(update::update_menu)
                .delete(delete::delete_menu),
        )
        .route(
            "/{id}/recipes",
            get(recipes::list_menu_recipes).post(recipes::add_menu_recipe),
        )
        .route(
            "/{id}/recipes/{recipe_id}",
            axum::routing::delete(recipes::remove_menu_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        get::get_menu,
        update::update_menu,
        delete::delete_menu,
        recipes::list_menu_recipes,
        recipes::add_menu_recipe,
        recipes::remove_menu_recipe,
    ),
    components(schemas(
        crate::models::Menu,
        crate::models::MenuChanges,
        recipes::AddMenuRecipeRequest,
        recipes::MenuRecipesResponse,
    ))
)]
pub struct ApiDoc;
