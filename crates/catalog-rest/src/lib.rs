//! # Catalog REST
//!
//! REST API layer using Axum for the product catalog cache.
//! Every product endpoint answers with the same envelope, reporting how long
//! the request took and whether the data came from the cache or the database.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
