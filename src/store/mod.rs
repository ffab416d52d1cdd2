//! Product persistence: the store seam plus the PostgreSQL implementation.

mod pg;

pub use pg::{ensure_schema, PgProductStore};

use crate::error::StoreError;
use crate::model::{NewProduct, Product, ProductUpdate};
use async_trait::async_trait;

/// Single-row CRUD over the products table.
///
/// Mutations targeting one row are conditional on the row existing, so the
/// existence check and the write happen as one store operation; `None` (or
/// `false` for removal) signals the id matched nothing.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All rows, newest id first.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    async fn find(&self, id: i32) -> Result<Option<Product>, StoreError>;

    async fn insert(&self, input: NewProduct) -> Result<Product, StoreError>;

    /// Overwrite every caller-writable field of the row.
    async fn replace(&self, id: i32, input: ProductUpdate)
        -> Result<Option<Product>, StoreError>;

    /// Logical negation of the row's current availability.
    async fn toggle_availability(&self, id: i32) -> Result<Option<Product>, StoreError>;

    /// Returns whether a row was actually removed.
    async fn remove(&self, id: i32) -> Result<bool, StoreError>;
}
