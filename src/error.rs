//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::service::validation::FieldError;

/// Failure raised by a product store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// One or more rule violations; the handler was never reached.
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("Producto No Encontrado")]
    NotFound,
    /// Store failure surfaced as a fixed per-operation message. The
    /// underlying cause is logged server-side only.
    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Adapter for `map_err`: wraps a store failure with the fixed text the
    /// caller will see.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |source| ApiError::Store { context, source }
    }
}

#[derive(Serialize)]
struct ErrorsBody {
    errors: Vec<FieldError>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsBody { errors })).into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "Producto No Encontrado",
                }),
            )
                .into_response(),
            ApiError::Store { context, source } => {
                tracing::error!(error = %source, context, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody { error: context }),
                )
                    .into_response()
            }
        }
    }
}
