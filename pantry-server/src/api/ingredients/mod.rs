pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/ingredients endpoints (mounted at /api/ingredients)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list::list_ingredients).post(create::create_ingredient),
        )
        .route(
            "/{id}",
            get(get::get_ingredient)
                .put(update::update_ingredient)
                .delete(delete::delete_ingredient),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_ingredient,
        list::list_ingredients,
        get::get_ingredient,
        update::update_ingredient,
        delete::delete_ingredient,
    ),
    components(schemas(
        crate::models::Ingredient,
        crate::models::NewIngredient,
        crate::models::IngredientChanges,
        list::ListIngredientsResponse,
    ))
)]
pub struct ApiDoc;
