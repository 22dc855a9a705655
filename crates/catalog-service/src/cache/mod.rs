//! Caching infrastructure for the service layer.
//!
//! A narrow key-value abstraction (get, set with optional expiry, delete)
//! with a Redis implementation and a process-local one.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheHealthCheck, CacheInterface, CacheValue};
pub use cache_keys::{CachePolicy, ProductMutation, DEFAULT_TTL};
pub use memory_cache::InMemoryCache;
pub use redis_cache::{RedisCacheService, RedisCacheServiceParameters};
