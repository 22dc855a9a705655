//! OpenAPI documentation configuration.

use crate::controllers::health_controller::{ComponentHealth, HealthResponse, ReadinessResponse};
use catalog_core::{DataSource, ErrorResponse, FieldError, Product, ProductId};
use catalog_service::ProductRequest;
use utoipa::OpenApi;

/// OpenAPI documentation for the catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog Cache API",
        version = "1.0.0",
        description = "Product catalog with a cache-aside read path",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Product endpoints
        crate::controllers::product_controller::list_products,
        crate::controllers::product_controller::get_product,
        crate::controllers::product_controller::create_product,
        crate::controllers::product_controller::update_product,
        crate::controllers::product_controller::delete_product,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ProductId,
            Product,
            DataSource,
            ErrorResponse,
            FieldError,
            ProductRequest,
            HealthResponse,
            ReadinessResponse,
            ComponentHealth,
        )
    ),
    tags(
        (name = "products", description = "Product catalog endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_product_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/products"));
        assert!(doc.paths.paths.contains_key("/api/products/{id}"));
        assert!(doc.paths.paths.contains_key("/ready"));
    }
}
