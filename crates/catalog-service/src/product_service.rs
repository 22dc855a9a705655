//! Product service trait definition.

use crate::dto::ProductRequest;
use async_trait::async_trait;
use catalog_core::{CatalogResult, Interface, Product, ProductId, Sourced};

/// Catalog operations with cache-aside reads.
///
/// Read results are labelled with where they were served from. Mutations
/// always report [`DataSource::Database`](catalog_core::DataSource).
#[async_trait]
pub trait ProductService: Interface + Send + Sync {
    /// Lists every product.
    async fn list_products(&self) -> CatalogResult<Sourced<Vec<Product>>>;

    /// Gets a product by ID.
    async fn get_product(&self, id: ProductId) -> CatalogResult<Sourced<Product>>;

    /// Creates a product. The store assigns the ID.
    async fn create_product(&self, request: ProductRequest) -> CatalogResult<Sourced<Product>>;

    /// Replaces name, price and description of an existing product.
    async fn update_product(
        &self,
        id: ProductId,
        request: ProductRequest,
    ) -> CatalogResult<Sourced<Product>>;

    /// Deletes a product.
    async fn delete_product(&self, id: ProductId) -> CatalogResult<Sourced<()>>;
}
