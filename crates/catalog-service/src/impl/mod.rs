//! Product service implementations.
//!
//! Trait definitions live in the parent module (`product_service.rs`).

pub mod product_service_impl;

pub use product_service_impl::{ProductServiceComponent, ProductServiceComponentParameters};
