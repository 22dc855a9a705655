//! # Catalog Server Library
//!
//! Dependency injection wiring and startup utilities for the catalog
//! cache server.

pub mod di;
pub mod startup;
