//! Shared application state for all routes.

use crate::store::ProductStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected store handle; production wires PostgreSQL, tests substitute
    /// their own implementation.
    pub store: Arc<dyn ProductStore>,
}
