//! MySQL product repository implementation.

use crate::{traits::ProductRepository, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, NewProduct, Product, ProductId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL product repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductRepository)]
pub struct MySqlProductRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductRepository {
    /// Creates a new MySQL product repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    price: f64,
    description: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            price: row.price,
            description: row.description,
        }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        debug!("Finding all products");

        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, description FROM products ORDER BY id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, description FROM products WHERE id = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn save(&self, product: &NewProduct) -> CatalogResult<Product> {
        debug!("Saving new product: {}", product.name);

        // MySQL doesn't support RETURNING, so insert then read the generated key
        let result = sqlx::query("INSERT INTO products (name, price, description) VALUES (?, ?, ?)")
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.description)
            .execute(self.pool.inner())
            .await?;

        let id = i32::try_from(result.last_insert_id())
            .map_err(|_| CatalogError::internal("Generated product id out of range"))?;

        Ok(Product::from_new(ProductId::new(id), product.clone()))
    }

    async fn update(&self, product: &Product) -> CatalogResult<Product> {
        debug!("Updating product: {}", product.id);

        sqlx::query("UPDATE products SET name = ?, price = ?, description = ? WHERE id = ?")
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.description)
            .bind(product.id.into_inner())
            .execute(self.pool.inner())
            .await?;

        // rows_affected is 0 for an unchanged row, so confirm by reading it back
        self.find_by_id(product.id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", product.id))
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
        debug!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> CatalogResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}

impl std::fmt::Debug for MySqlProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProductRepository").finish_non_exhaustive()
    }
}
