//! Repository trait definitions.

use catalog_core::{CatalogResult, Interface, NewProduct, Product, ProductId};
use async_trait::async_trait;

/// Product repository trait.
///
/// This is the authoritative store; cached copies are always rebuilt from it.
#[async_trait]
pub trait ProductRepository: Interface + Send + Sync {
    /// Returns every product, ordered by ID.
    async fn find_all(&self) -> CatalogResult<Vec<Product>>;

    /// Finds a product by ID.
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Inserts a new product and returns it with its assigned ID.
    async fn save(&self, product: &NewProduct) -> CatalogResult<Product>;

    /// Overwrites an existing product.
    async fn update(&self, product: &Product) -> CatalogResult<Product>;

    /// Deletes a product by ID. Returns whether a row was removed.
    async fn delete(&self, id: ProductId) -> CatalogResult<bool>;

    /// Counts all products.
    async fn count(&self) -> CatalogResult<u64>;
}
