//! Process-local cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use catalog_core::CatalogResult;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| now < at)
    }
}

/// In-memory cache with per-entry expiry.
///
/// Expiry is measured on the tokio clock. Expired entries are dropped lazily
/// on access.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.read().await.values().filter(|e| e.is_live(now)).count()
    }

    /// Returns true if no live entry is stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Returns true if a live entry is stored under `key`.
    pub async fn contains_key(&self, key: &str) -> bool {
        let now = Instant::now();
        self.entries.read().await.get(key).is_some_and(|e| e.is_live(now))
    }
}

#[async_trait]
impl CacheInterface for InMemoryCache {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        let value = match entries.get(key) {
            Some(entry) if entry.is_live(now) => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        };

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Option<Duration>) -> CatalogResult<()> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CatalogResult<bool> {
        let now = Instant::now();
        let removed = self.entries.write().await.remove(key);
        Ok(removed.is_some_and(|e| e.is_live(now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CacheExt;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = InMemoryCache::new();
        cache.set("product_1", &"Pen".to_string(), Some(TTL)).await.unwrap();

        let value: Option<String> = cache.get("product_1").await.unwrap();
        assert_eq!(value.as_deref(), Some("Pen"));
    }

    #[tokio::test]
    async fn test_missing_key_is_absent() {
        let cache = InMemoryCache::new();
        let value: Option<String> = cache.get("nope").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_empty_payload_is_absent() {
        let cache = InMemoryCache::new();
        cache.set_raw("products", "", Some(TTL)).await.unwrap();

        let value: Option<Vec<i32>> = cache.get("products").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let cache = InMemoryCache::new();
        cache.set("k", &1_i32, Some(TTL)).await.unwrap();
        cache.set("k", &2_i32, Some(TTL)).await.unwrap();

        assert_eq!(cache.get::<i32>("k").await.unwrap(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let cache = InMemoryCache::new();
        cache.set("products", &vec![1], Some(TTL)).await.unwrap();

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(cache.contains_key("products").await);

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(cache.get::<Vec<i32>>("products").await.unwrap().is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_without_ttl_never_expires() {
        let cache = InMemoryCache::new();
        cache.set("k", &1_i32, None).await.unwrap();

        tokio::time::advance(Duration::from_secs(86_400)).await;
        assert_eq!(cache.get::<i32>("k").await.unwrap(), Some(1));
    }

    #[tokio::test]
    async fn test_delete_absent_key_leaves_others() {
        let cache = InMemoryCache::new();
        cache.set("product_1", &1_i32, Some(TTL)).await.unwrap();

        assert!(!cache.delete("product_2").await.unwrap());
        assert!(cache.contains_key("product_1").await);
        assert_eq!(cache.len().await, 1);

        assert!(cache.delete("product_1").await.unwrap());
        assert!(!cache.delete("product_1").await.unwrap());
    }

    #[tokio::test]
    async fn test_undecodable_payload_is_an_error() {
        let cache = InMemoryCache::new();
        cache.set_raw("k", "{not json", Some(TTL)).await.unwrap();

        let err = cache.get::<Vec<i32>>("k").await.unwrap_err();
        assert!(matches!(err, catalog_core::CatalogError::Serialization(_)));
    }
}
