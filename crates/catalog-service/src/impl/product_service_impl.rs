//! Product service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, CachePolicy, CacheValue, ProductMutation};
use crate::dto::ProductRequest;
use crate::product_service::ProductService;
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, NewProduct, Product, ProductId, Sourced, ValidateExt};
use catalog_repository::ProductRepository;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Cache-aside product service component for Shaku DI.
///
/// The cache is advisory. A failing or corrupt cache degrades to database
/// reads and never fails a request; only repository errors propagate.
#[derive(Component)]
#[shaku(interface = ProductService)]
pub struct ProductServiceComponent {
    #[shaku(inject)]
    product_repository: Arc<dyn ProductRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    policy: CachePolicy,
}

impl ProductServiceComponent {
    /// Creates the service outside of the DI container.
    #[must_use]
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheInterface>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            product_repository,
            cache,
            policy,
        }
    }

    /// Reads a cached value, treating any cache failure as a miss.
    async fn read_cached<T: CacheValue + Send>(&self, key: &str) -> Option<T> {
        match self.cache.get::<T>(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Cache read for '{}' failed, falling back to database: {}", key, e);
                None
            }
        }
    }

    /// Stores a value read from the repository.
    async fn populate<T: CacheValue + Sync>(&self, key: &str, value: &T, ttl: Duration) {
        if let Err(e) = self.cache.set(key, value, Some(ttl)).await {
            warn!("Failed to populate cache key '{}': {}", key, e);
        }
    }

    /// Drops the keys a committed write made stale.
    async fn invalidate(&self, mutation: ProductMutation) {
        for key in mutation.invalidated_keys() {
            if let Err(e) = self.cache.delete(&key).await {
                warn!("Failed to invalidate cache key '{}': {}", key, e);
            }
        }
    }

    async fn find_existing(&self, id: ProductId) -> CatalogResult<Product> {
        self.product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))
    }
}

#[async_trait]
impl ProductService for ProductServiceComponent {
    async fn list_products(&self) -> CatalogResult<Sourced<Vec<Product>>> {
        let key = cache_keys::product_list();

        if let Some(products) = self.read_cached::<Vec<Product>>(&key).await {
            debug!("Serving {} products from cache", products.len());
            return Ok(Sourced::cache(products));
        }

        let products = self.product_repository.find_all().await?;
        self.populate(&key, &products, self.policy.list_ttl()).await;

        Ok(Sourced::database(products))
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<Sourced<Product>> {
        debug!("Getting product: {}", id);

        let key = cache_keys::product_by_id(id);

        if let Some(product) = self.read_cached::<Product>(&key).await {
            return Ok(Sourced::cache(product));
        }

        // Absence is not cached; the next lookup goes to the repository again
        let product = self.find_existing(id).await?;
        self.populate(&key, &product, self.policy.item_ttl()).await;

        Ok(Sourced::database(product))
    }

    async fn create_product(&self, request: ProductRequest) -> CatalogResult<Sourced<Product>> {
        debug!("Creating product: {}", request.name);

        request.validate_request()?;

        let saved = self
            .product_repository
            .save(&NewProduct::from(request))
            .await?;

        self.invalidate(ProductMutation::Created).await;

        info!("Product created: {}", saved.id);
        Ok(Sourced::database(saved))
    }

    async fn update_product(
        &self,
        id: ProductId,
        request: ProductRequest,
    ) -> CatalogResult<Sourced<Product>> {
        debug!("Updating product: {}", id);

        request.validate_request()?;

        let mut product = self.find_existing(id).await?;
        product.apply_changes(NewProduct::from(request));

        let updated = self.product_repository.update(&product).await?;

        self.invalidate(ProductMutation::Updated(id)).await;

        info!("Product updated: {}", id);
        Ok(Sourced::database(updated))
    }

    async fn delete_product(&self, id: ProductId) -> CatalogResult<Sourced<()>> {
        debug!("Deleting product: {}", id);

        self.find_existing(id).await?;

        if !self.product_repository.delete(id).await? {
            return Err(CatalogError::not_found("Product", id));
        }

        self.invalidate(ProductMutation::Deleted(id)).await;

        info!("Product deleted: {}", id);
        Ok(Sourced::database(()))
    }
}

impl std::fmt::Debug for ProductServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceComponent")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
