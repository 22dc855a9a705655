//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use catalog_core::{CatalogResult, HealthCheck, HealthStatus};
use serde::{de::DeserializeOwned, Serialize};
use shaku::Interface;
use std::sync::Arc;
use std::time::Duration;

/// Cache interface for storing and retrieving cached data.
///
/// Values are opaque strings; typed access goes through [`CacheExt`].
/// Entries are independent of each other and are only ever evicted by expiry
/// or an explicit delete.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>>;

    /// Store a raw value, overwriting any previous one.
    ///
    /// With `ttl` set to `None` the entry never expires.
    async fn set_raw(&self, key: &str, value: &str, ttl: Option<Duration>) -> CatalogResult<()>;

    /// Delete a value from the cache. Deleting an absent key is not an error.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> CatalogResult<bool>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;

    /// Verifies the backing store is reachable.
    async fn ping(&self) -> CatalogResult<()> {
        Ok(())
    }
}

/// Encoding of values held in the cache.
///
/// Every serde type is covered by the blanket impl, which stores canonical
/// JSON text.
pub trait CacheValue: Sized {
    /// Encodes the value to its stored text form.
    fn encode(&self) -> CatalogResult<String>;

    /// Decodes a value from its stored text form.
    fn decode(raw: &str) -> CatalogResult<Self>;
}

impl<T: Serialize + DeserializeOwned> CacheValue for T {
    fn encode(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn decode(raw: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    ///
    /// An empty stored payload counts as absent.
    async fn get<T: CacheValue + Send>(&self, key: &str) -> CatalogResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(raw) if !raw.is_empty() => Ok(Some(T::decode(&raw)?)),
            _ => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: CacheValue + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> CatalogResult<()> {
        let raw = value.encode()?;
        self.set_raw(key, &raw, ttl).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}

/// Readiness probe for the cache store.
///
/// An unreachable cache only degrades the service, since reads fall back to
/// the database.
pub struct CacheHealthCheck {
    cache: Arc<dyn CacheInterface>,
}

impl CacheHealthCheck {
    #[must_use]
    pub fn new(cache: Arc<dyn CacheInterface>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl HealthCheck for CacheHealthCheck {
    fn name(&self) -> &str {
        "cache"
    }

    async fn check(&self) -> HealthStatus {
        if !self.cache.is_enabled() {
            return HealthStatus::Degraded("cache disabled".to_string());
        }
        match self.cache.ping().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Degraded(e.to_string()),
        }
    }
}
