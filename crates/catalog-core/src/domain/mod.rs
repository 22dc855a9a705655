//! # Catalog Domain
//!
//! Domain entities for the product catalog.

pub mod entities;

pub use entities::*;
