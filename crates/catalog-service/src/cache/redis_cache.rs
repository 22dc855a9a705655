//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use catalog_config::RedisConfig;
use catalog_core::{CatalogError, CatalogResult};
use deadpool_redis::{redis::AsyncCommands, Pool, PoolConfig, Runtime};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Redis-based cache service.
///
/// Built without a pool the service is disabled: every read misses and
/// writes are no-ops.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op cache service (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Create a connection pool from configuration.
    ///
    /// Returns `None` when Redis is disabled. No connection is opened until
    /// the first command.
    pub fn create_pool(config: &RedisConfig) -> CatalogResult<Option<Arc<Pool>>> {
        if !config.enabled {
            info!("Redis disabled, cache reads will always miss");
            return Ok(None);
        }

        let mut redis_cfg = deadpool_redis::Config::from_url(&config.url);
        redis_cfg.pool = Some(PoolConfig::new(config.pool_size as usize));
        let pool = redis_cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| CatalogError::Cache(format!("Failed to create Redis pool: {}", e)))?;

        info!("Redis pool created for {}", config.url);
        Ok(Some(Arc::new(pool)))
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> CatalogResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                CatalogError::Cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(CatalogError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(key).await.map_err(|e| {
            CatalogError::Cache(format!("Failed to get key '{}': {}", key, e))
        })?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Option<Duration>) -> CatalogResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;

        match ttl {
            Some(ttl) => {
                let ttl_ms = expiry_millis(ttl);
                conn.pset_ex::<_, _, ()>(key, value, ttl_ms).await.map_err(|e| {
                    CatalogError::Cache(format!("Failed to set key '{}': {}", key, e))
                })?;
                debug!("Cached key '{}' with TTL {}ms", key, ttl_ms);
            }
            None => {
                conn.set::<_, _, ()>(key, value).await.map_err(|e| {
                    CatalogError::Cache(format!("Failed to set key '{}': {}", key, e))
                })?;
                debug!("Cached key '{}' without expiry", key);
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> CatalogResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn.del(key).await.map_err(|e| {
            CatalogError::Cache(format!("Failed to delete key '{}': {}", key, e))
        })?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn ping(&self) -> CatalogResult<()> {
        let mut conn = self.get_conn().await?;
        let _: String = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| CatalogError::Cache(format!("PING failed: {}", e)))?;
        Ok(())
    }
}

/// PSETEX argument for a TTL. Redis rejects a zero expiry.
fn expiry_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheService")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
