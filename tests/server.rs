//! Server shell tests: welcome route and CORS policy on the API mount.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use products_api::{
    build_app, AppState, NewProduct, Product, ProductStore, ProductUpdate, Settings, StoreError,
};
use std::sync::Arc;
use tower::ServiceExt;

struct EmptyStore;

#[async_trait]
impl ProductStore for EmptyStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(Vec::new())
    }
    async fn find(&self, _id: i32) -> Result<Option<Product>, StoreError> {
        Ok(None)
    }
    async fn insert(&self, _input: NewProduct) -> Result<Product, StoreError> {
        unimplemented!("not exercised by shell tests")
    }
    async fn replace(
        &self,
        _id: i32,
        _input: ProductUpdate,
    ) -> Result<Option<Product>, StoreError> {
        Ok(None)
    }
    async fn toggle_availability(&self, _id: i32) -> Result<Option<Product>, StoreError> {
        Ok(None)
    }
    async fn remove(&self, _id: i32) -> Result<bool, StoreError> {
        Ok(false)
    }
}

/// Store whose every operation fails, standing in for an unreachable
/// database behind the lazy pool.
struct ClosedStore;

fn closed() -> StoreError {
    StoreError::Db(sqlx::Error::PoolClosed)
}

#[async_trait]
impl ProductStore for ClosedStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Err(closed())
    }
    async fn find(&self, _id: i32) -> Result<Option<Product>, StoreError> {
        Err(closed())
    }
    async fn insert(&self, _input: NewProduct) -> Result<Product, StoreError> {
        Err(closed())
    }
    async fn replace(
        &self,
        _id: i32,
        _input: ProductUpdate,
    ) -> Result<Option<Product>, StoreError> {
        Err(closed())
    }
    async fn toggle_availability(&self, _id: i32) -> Result<Option<Product>, StoreError> {
        Err(closed())
    }
    async fn remove(&self, _id: i32) -> Result<bool, StoreError> {
        Err(closed())
    }
}

fn settings(frontend_url: Option<&str>) -> Settings {
    Settings {
        database_url: "postgres://localhost/products".into(),
        frontend_url: frontend_url.map(String::from),
        port: 4000,
    }
}

fn shell_with(store: Arc<dyn ProductStore>, frontend_url: Option<&str>) -> axum::Router {
    let state = AppState { store };
    build_app(state, &settings(frontend_url))
}

fn shell(frontend_url: Option<&str>) -> axum::Router {
    shell_with(Arc::new(EmptyStore), frontend_url)
}

#[tokio::test]
async fn root_serves_welcome_message() {
    let app = shell(None);
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, "REST API de Productos");
}

#[tokio::test]
async fn api_allows_the_configured_frontend_origin() {
    let app = shell(Some("http://localhost:5173"));
    let response = app
        .oneshot(
            Request::get("/api/products")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn failing_store_surfaces_fixed_list_message() {
    let app = shell_with(Arc::new(ClosedStore), None);
    let response = app
        .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    // Exactly the fixed text; the sqlx cause stays server-side.
    assert_eq!(
        body,
        serde_json::json!({ "error": "Error al obtener los productos" })
    );
    let raw = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!raw.to_lowercase().contains("pool"));
}

#[tokio::test]
async fn failing_store_surfaces_fixed_delete_message() {
    let app = shell_with(Arc::new(ClosedStore), None);
    let response = app
        .oneshot(
            Request::delete("/api/products/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "error": "Error al eliminar el producto" })
    );
}

#[tokio::test]
async fn requests_without_origin_are_served() {
    let app = shell(Some("http://localhost:5173"));
    let response = app
        .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
