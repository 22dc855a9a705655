//! Integration tests for MySqlProductRepository.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use catalog_core::{NewProduct, ProductId};
use catalog_repository::{MySqlProductRepository, ProductRepository};
use common::TestDatabase;

fn new_product(name: &str, price: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
        description: format!("{} description", name),
    }
}

#[tokio::test]
async fn test_save_and_find_by_id() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let saved = repo.save(&new_product("Pen", 1.5)).await.expect("Failed to save product");
    assert_eq!(saved.name, "Pen");

    let found = repo
        .find_by_id(saved.id)
        .await
        .expect("Failed to find product")
        .expect("Product not found");

    assert_eq!(found, saved);
    assert_eq!(found.description, "Pen description");
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let result = repo.find_by_id(ProductId::new(424_242)).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_and_count() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    repo.save(&new_product("Pen", 1.5)).await.expect("Failed to save product");
    repo.save(&new_product("Pencil", 0.5)).await.expect("Failed to save product");

    let all = repo.find_all().await.expect("Query failed");
    assert_eq!(all.len(), 2);
    assert!(all[0].id < all[1].id);
    assert_eq!(repo.count().await.expect("Count failed"), 2);
}

#[tokio::test]
async fn test_update_product() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let mut product = repo.save(&new_product("Pen", 1.5)).await.expect("Failed to save product");
    product.price = 2.0;
    product.name = "Fountain Pen".to_string();

    let updated = repo.update(&product).await.expect("Failed to update product");
    assert_eq!(updated.name, "Fountain Pen");
    assert!((updated.price - 2.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_update_unchanged_row_succeeds() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let product = repo.save(&new_product("Pen", 1.5)).await.expect("Failed to save product");
    let updated = repo.update(&product).await.expect("Failed to update product");
    assert_eq!(updated, product);
}

#[tokio::test]
async fn test_delete_product() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let product = repo.save(&new_product("Pen", 1.5)).await.expect("Failed to save product");

    assert!(repo.delete(product.id).await.expect("Delete failed"));
    assert!(repo.find_by_id(product.id).await.expect("Query failed").is_none());
    assert!(!repo.delete(product.id).await.expect("Delete failed"));
}
