//! OpenAPI document, served behind Swagger UI at `/docs`.

use crate::model::{NewProduct, Product, ProductUpdate};
use crate::service::validation::{FieldError, Location};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API Productos",
        description = "API Docs for Products",
        version = "1.0.0"
    ),
    paths(
        crate::handlers::product::get_products,
        crate::handlers::product::get_product_by_id,
        crate::handlers::product::create_product,
        crate::handlers::product::update_product,
        crate::handlers::product::update_availability,
        crate::handlers::product::delete_product,
    ),
    components(schemas(Product, NewProduct, ProductUpdate, FieldError, Location)),
    tags(
        (name = "Products", description = "API operations related to products")
    )
)]
pub struct ApiDoc;
