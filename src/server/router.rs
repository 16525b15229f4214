//! HTTP routing and OpenAPI documentation.
//!
//! Every handler is registered through utoipa's [`OpenApiRouter`] so the OpenAPI document
//! served at `/api/docs/openapi.json` always matches the routes. Handlers sharing a path are
//! registered in one `routes!` call.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the router with all board routes and Swagger UI at `/api/docs`.
///
/// The fallback and the pipeline stages are added by [`crate::server::app::build_app`].
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Board", description = "Discussion board API"), tags(
        (name = controller::index::INDEX_TAG, description = "Front page"),
        (name = controller::post::POST_TAG, description = "Post pages and submission"),
        (name = controller::user::USER_TAG, description = "Registration and session authentication"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::index::index))
        .routes(routes!(controller::post::list))
        .routes(routes!(controller::post::write_page, controller::post::write))
        .routes(routes!(controller::post::detail))
        .routes(routes!(controller::user::join_page, controller::user::join))
        .routes(routes!(controller::user::login_page, controller::user::login))
        .routes(routes!(controller::user::logout))
        .routes(routes!(controller::user::me))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
