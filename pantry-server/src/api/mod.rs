pub mod categories;
pub mod groups;
pub mod ingredients;
pub mod menus;
pub mod notifications;
pub mod plans;
pub mod recipes;
pub mod roles;
pub mod shopping_lists;
pub mod testing;
pub mod units;
pub mod users;

use mesa_core::pagination::PaginationMetadata;
use mesa_core::ErrorResponse;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components and security
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse, PaginationMetadata)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    if let Some(components) = spec.components.as_mut() {
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(
                mesa_core::auth::API_KEY_HEADER,
            ))),
        );
    }

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        testing::ApiDoc::openapi(),
        roles::ApiDoc::openapi(),
        users::ApiDoc::openapi(),
        groups::ApiDoc::openapi(),
        categories::ApiDoc::openapi(),
        units::ApiDoc::openapi(),
        ingredients::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        plans::ApiDoc::openapi(),
        menus::ApiDoc::openapi(),
        shopping_lists::ApiDoc::openapi(),
        notifications::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
