//! Products API: product catalog REST backend.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{ApiError, StoreError};
pub use model::{NewProduct, Product, ProductUpdate};
pub use response::{data_created, data_ok};
pub use routes::{common_routes, product_routes};
pub use server::build_app;
pub use state::AppState;
pub use store::{ensure_schema, PgProductStore, ProductStore};
