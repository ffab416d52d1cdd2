//! PostgreSQL product store.

use crate::error::StoreError;
use crate::model::{NewProduct, Product, ProductUpdate};
use crate::store::ProductStore;
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, price, availability, created_at, updated_at";

/// Create the products table when missing. Safe to run on every start.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            availability BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products ORDER BY id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i32) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, input: NewProduct) -> Result<Product, StoreError> {
        tracing::debug!(name = %input.name, "insert product");
        let row = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(input.name)
        .bind(input.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn replace(
        &self,
        id: i32,
        input: ProductUpdate,
    ) -> Result<Option<Product>, StoreError> {
        tracing::debug!(id, "replace product");
        // Conditional single-statement update: no window between the
        // existence check and the write.
        let row = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products
             SET name = $2, price = $3, availability = $4, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(input.name)
        .bind(input.price)
        .bind(input.availability)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn toggle_availability(&self, id: i32) -> Result<Option<Product>, StoreError> {
        tracing::debug!(id, "toggle availability");
        let row = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products
             SET availability = NOT availability, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn remove(&self, id: i32) -> Result<bool, StoreError> {
        tracing::debug!(id, "delete product");
        let row = sqlx::query("DELETE FROM products WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}
