//! Server shell: CORS, request logging, docs, static assets, API mount.

use crate::config::Settings;
use crate::docs::ApiDoc;
use crate::routes::{common_routes, product_routes};
use crate::state::AppState;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// CORS for the API routes: one allowed frontend origin, or permissive when
/// none is configured. Requests without an Origin header (curl, Swagger UI,
/// Postman) always pass.
fn cors_layer(settings: &Settings) -> CorsLayer {
    let origin = settings
        .frontend_url
        .as_deref()
        .and_then(|o| o.parse::<HeaderValue>().ok());
    match origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}

/// Assemble the full application router. The CORS allow-list applies to the
/// API mount only; `/docs` stays unrestricted.
pub fn build_app(state: AppState, settings: &Settings) -> Router {
    let api = product_routes(state).layer(cors_layer(settings));

    Router::new()
        .merge(common_routes())
        .nest("/api/products", api)
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
