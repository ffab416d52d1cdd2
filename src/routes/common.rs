//! Common routes: welcome message outside the API prefix.

use axum::{routing::get, Json, Router};

async fn welcome() -> Json<&'static str> {
    Json("REST API de Productos")
}

pub fn common_routes() -> Router {
    Router::new().route("/", get(welcome))
}
