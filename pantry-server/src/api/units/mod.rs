pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/units endpoints (mounted at /api/units)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_units).post(create::create_unit))
        .route(
            "/{id}",
            get(get::get_unit)
                .put(update::update_unit)
                .delete(delete::delete_unit),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_unit,
        list::list_units,
        get::get_unit,
        update::update_unit,
        delete::delete_unit,
    ),
    components(schemas(
        crate::models::Unit,
        crate::models::NewUnit,
        list::ListUnitsResponse,
    ))
)]
pub struct ApiDoc;
