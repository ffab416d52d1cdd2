//! Product row and request payload types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::service::validation::numeric_value;

/// A catalog product as persisted. Timestamps are maintained by the store.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the store on creation, immutable thereafter.
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload: `name` and `price` only; the store fills the rest.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewProduct {
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
}

/// Full-update payload: every caller-writable field.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

impl NewProduct {
    /// Shape a raw body that already passed the creation rules.
    pub fn from_body(body: &Value) -> Self {
        NewProduct {
            name: text_field(body, "name"),
            price: body.get("price").and_then(numeric_value).unwrap_or_default(),
        }
    }
}

impl ProductUpdate {
    /// Shape a raw body that already passed the full-update rules.
    pub fn from_body(body: &Value) -> Self {
        let availability = match body.get("availability") {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            _ => false,
        };
        ProductUpdate {
            name: text_field(body, "name"),
            price: body.get("price").and_then(numeric_value).unwrap_or_default(),
            availability,
        }
    }
}

fn text_field(body: &Value, field: &str) -> String {
    match body.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(v) if !v.is_null() => v.to_string(),
        _ => String::new(),
    }
}
