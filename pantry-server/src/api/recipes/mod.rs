pub mod categories;
pub mod create;
pub mod delete;
pub mod get;
pub mod ingredients;
pub mod list;
pub mod owners;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        .route(
            "/{id}/ingredients",
            get(ingredients::list_recipe_ingredients).post(ingredients::add_recipe_ingredient),
        )
        .route(
            "/{id}/ingredients/{ingredient_id}",
            axum::routing::put(ingredients::update_recipe_ingredient)
                .delete(ingredients::remove_recipe_ingredient),
        )
        .route(
            "/{id}/categories",
            get(categories::list_recipe_categories).post(categories::add_recipe_category),
        )
        .route(
            "/{id}/categories/{category_id}",
            axum::routing::delete(categories::remove_recipe_category),
        )
        .route(
            "/{id}/owners",
            get(owners::list_recipe_owners).post(owners::add_recipe_owner),
        )
        .route(
            "/{id}/owners/{user_id}",
            axum::routing::put(owners::update_recipe_owner)
                .delete(owners::remove_recipe_owner),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        ingredients::list_recipe_ingredients,
        ingredients::add_recipe_ingredient,
        ingredients::update_recipe_ingredient,
        ingredients::remove_recipe_ingredient,
        categories::list_recipe_categories,
        categories::add_recipe_category,
        categories::remove_recipe_category,
        owners::list_recipe_owners,
        owners::add_recipe_owner,
        owners::update_recipe_owner,
        owners::remove_recipe_owner,
    ),
    components(schemas(
        crate::models::Recipe,
        crate::models::RecipeChanges,
        crate::models::RecipeIngredient,
        crate::models::RecipeIngredientChanges,
        crate::models::UserRecipe,
        create::CreateRecipeRequest,
        list::ListRecipesResponse,
        ingredients::AddRecipeIngredientRequest,
        ingredients::RecipeIngredientEntry,
        ingredients::RecipeIngredientsResponse,
        categories::AddRecipeCategoryRequest,
        categories::RecipeCategoriesResponse,
        owners::AddRecipeOwnerRequest,
        owners::UpdateRecipeOwnerRequest,
        owners::RecipeOwnersResponse,
    ))
)]
pub struct ApiDoc;
