//! Product handlers: one store interaction per operation.
//!
//! Each handler runs its route's rule set first and gates on the result, so
//! validation failures short-circuit before any store access. Store failures
//! map to a fixed per-operation message; the cause never reaches the caller.

use crate::error::ApiError;
use crate::model::{NewProduct, ProductUpdate};
use crate::response::{data_created, data_ok};
use crate::service::validation::{FieldError, RequestValidator, CREATE_RULES, UPDATE_RULES};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// Error gate: stop the pipeline on any collected violation.
fn gate(errors: Vec<FieldError>) -> Result<(), ApiError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

fn checked_id(raw: &str) -> Result<i32, ApiError> {
    RequestValidator::check_id(raw).map_err(|e| ApiError::Validation(vec![e]))
}

/// List every product, newest first.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "Lista de productos en `{ data }`"),
        (status = 500, description = "Fallo del almacenamiento")
    )
)]
pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let products = state
        .store
        .list()
        .await
        .map_err(ApiError::store("Error al obtener los productos"))?;
    Ok(data_ok(products))
}

/// Fetch one product by id.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Identificador del producto")),
    responses(
        (status = 200, description = "Producto en `{ data }`"),
        (status = 400, description = "Identificador mal formado"),
        (status = 404, description = "Producto No Encontrado")
    )
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = checked_id(&id)?;
    let product = state
        .store
        .find(id)
        .await
        .map_err(ApiError::store("Error al obtener el producto"))?
        .ok_or(ApiError::NotFound)?;
    Ok(data_ok(product))
}

/// Create a product from a validated body.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Producto creado en `{ data }`"),
        (status = 400, description = "Errores de validación en `{ errors }`", body = [FieldError])
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    gate(RequestValidator::run(CREATE_RULES, &body))?;
    let product = state
        .store
        .insert(NewProduct::from_body(&body))
        .await
        .map_err(ApiError::store("Error al crear el producto"))?;
    Ok(data_created(product))
}

/// Overwrite every caller-writable field of a product.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Identificador del producto")),
    request_body = ProductUpdate,
    responses(
        (status = 200, description = "Producto actualizado en `{ data }`"),
        (status = 400, description = "Errores de validación en `{ errors }`", body = [FieldError]),
        (status = 404, description = "Producto No Encontrado")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let id = checked_id(&id)?;
    gate(RequestValidator::run(UPDATE_RULES, &body))?;
    let product = state
        .store
        .replace(id, ProductUpdate::from_body(&body))
        .await
        .map_err(ApiError::store("Error al actualizar el producto"))?
        .ok_or(ApiError::NotFound)?;
    Ok(data_ok(product))
}

/// Flip a product's availability flag.
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Identificador del producto")),
    responses(
        (status = 200, description = "Producto con disponibilidad invertida en `{ data }`"),
        (status = 400, description = "Identificador mal formado"),
        (status = 404, description = "Producto No Encontrado")
    )
)]
pub async fn update_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = checked_id(&id)?;
    let product = state
        .store
        .toggle_availability(id)
        .await
        .map_err(ApiError::store("Error al actualizar la disponibilidad"))?
        .ok_or(ApiError::NotFound)?;
    Ok(data_ok(product))
}

/// Remove a product.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Identificador del producto")),
    responses(
        (status = 200, description = "Confirmación `{ data: \"Producto Eliminado\" }`"),
        (status = 400, description = "Identificador mal formado"),
        (status = 404, description = "Producto No Encontrado")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = checked_id(&id)?;
    let removed = state
        .store
        .remove(id)
        .await
        .map_err(ApiError::store("Error al eliminar el producto"))?;
    if !removed {
        return Err(ApiError::NotFound);
    }
    Ok(data_ok("Producto Eliminado"))
}
