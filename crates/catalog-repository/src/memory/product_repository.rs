//! In-memory product repository.

use crate::traits::ProductRepository;
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, NewProduct, Product, ProductId};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local product store with sequential identifiers.
///
/// Behaves like the MySQL table for the operations the catalog uses; ids
/// start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    products: BTreeMap<ProductId, Product>,
    last_id: i32,
}

impl InMemoryProductRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store, assigning ids in order.
    pub async fn with_products(products: Vec<NewProduct>) -> Self {
        let repo = Self::new();
        for product in products {
            let mut state = repo.state.write().await;
            state.last_id += 1;
            let id = ProductId::new(state.last_id);
            state.products.insert(id, Product::from_new(id, product));
        }
        repo
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.state.read().await.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        Ok(self.state.read().await.products.get(&id).cloned())
    }

    async fn save(&self, product: &NewProduct) -> CatalogResult<Product> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = ProductId::new(state.last_id);
        let stored = Product::from_new(id, product.clone());
        state.products.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> CatalogResult<Product> {
        let mut state = self.state.write().await;
        match state.products.get_mut(&product.id) {
            Some(existing) => {
                existing.clone_from(product);
                Ok(product.clone())
            }
            None => Err(CatalogError::not_found("Product", product.id)),
        }
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
        Ok(self.state.write().await.products.remove(&id).is_some())
    }

    async fn count(&self) -> CatalogResult<u64> {
        Ok(self.state.read().await.products.len() as u64)
    }
}
