//! # Catalog Service
//!
//! Cache-aside policy for the product catalog.
//!
//! Reads consult the cache first and fall back to the repository, repopulating
//! the cache on a miss. Writes go to the repository and then invalidate the
//! affected keys; the write path never populates the cache.

pub mod cache;
pub mod dto;
pub mod product_service;
pub mod r#impl;

pub use cache::*;
pub use dto::*;
pub use product_service::*;
pub use r#impl::ProductServiceComponent;
