//! In-process repository implementations.

mod product_repository;

pub use product_repository::*;
