pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod menus;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/plans endpoints (mounted at /api/plans)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_plans).post(create::create_plan))
        .route(
            "/{id}",
            get(get::get_plan)
                .put(update::update_plan)
                .delete(delete::delete_plan),
        )
        .route(
            "/{id}/menus",
            get(menus::list_plan_menus).post(menus::create_plan_menu),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_plan,
        list::list_plans,
        get::get_plan,
        update::update_plan,
        delete::delete_plan,
        menus::list_plan_menus,
        menus::create_plan_menu,
    ),
    components(schemas(
        crate::models::Plan,
        crate::models::PlanChanges,
        crate::models::Menu,
        create::CreatePlanRequest,
        list::ListPlansResponse,
        menus::CreateMenuRequest,
        menus::PlanMenusResponse,
    ))
)]
pub struct ApiDoc;
