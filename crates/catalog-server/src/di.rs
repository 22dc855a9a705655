//! Dependency injection module using Shaku.
//!
//! `CatalogModule` wires the MySQL repository, the cache store and the
//! cache-aside product service into a single container. The cache store is
//! Redis unless the configuration selects the process-local backend, in which
//! case the Redis component is overridden with an in-memory map.

use catalog_config::{AppConfig, CacheBackend};
use catalog_core::{CatalogResult, HasComponent};
use catalog_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, MySqlProductRepository,
    ProductRepository,
};
use catalog_service::{
    CacheInterface, CachePolicy, InMemoryCache, ProductService, ProductServiceComponent,
    RedisCacheService, RedisCacheServiceParameters,
};
use catalog_service::r#impl::ProductServiceComponentParameters;
use shaku::module;
use std::sync::Arc;
use tracing::info;

// Single-process deployment: database pool, repository, cache store and
// the cache-aside service.
module! {
    pub CatalogModule {
        components = [
            DatabasePool,
            MySqlProductRepository,
            RedisCacheService,
            ProductServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the catalog module around an established database pool.
///
/// Fails only when the Redis pool cannot be created from its URL; an
/// unreachable Redis server is tolerated at runtime.
pub fn build_catalog_module(
    db_pool: DatabasePool,
    config: &AppConfig,
) -> CatalogResult<Arc<CatalogModule>> {
    let policy = CachePolicy::from(&config.cache);
    let cache_pool = match config.cache.backend {
        CacheBackend::Redis => RedisCacheService::create_pool(&config.redis)?,
        CacheBackend::Memory => None,
    };

    let mut builder = CatalogModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.into_inner(),
        })
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: cache_pool,
        })
        .with_component_parameters::<ProductServiceComponent>(ProductServiceComponentParameters {
            policy,
        });

    if config.cache.backend == CacheBackend::Memory {
        info!("Using in-memory cache store");
        builder = builder.with_component_override::<dyn CacheInterface>(Box::new(InMemoryCache::new()));
    }

    Ok(Arc::new(builder.build()))
}

/// Resolves the components the server needs at startup.
pub trait CatalogResolver {
    fn product_service(&self) -> Arc<dyn ProductService>;

    fn product_repository(&self) -> Arc<dyn ProductRepository>;

    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;

    fn cache(&self) -> Arc<dyn CacheInterface>;
}

impl CatalogResolver for CatalogModule {
    fn product_service(&self) -> Arc<dyn ProductService> {
        self.resolve()
    }

    fn product_repository(&self) -> Arc<dyn ProductRepository> {
        self.resolve()
    }

    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }
}
