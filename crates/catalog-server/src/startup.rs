//! Server startup utilities.

use catalog_config::{AppConfig, CacheBackend};
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   ______      __        __               ______           __
  / ____/___ _/ /_____ _/ /___  ____ _   / ____/___ ______/ /_  ___
 / /   / __ `/ __/ __ `/ / __ \/ __ `/  / /   / __ `/ ___/ __ \/ _ \
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /  / /___/ /_/ / /__/ / / /  __/
\____/\__,_/\__/\__,_/_/\____/\__, /   \____/\__,_/\___/_/ /_/\___/
                             /____/
    "#);
}

/// Describes the active cache store.
#[must_use]
pub fn cache_summary(config: &AppConfig) -> String {
    match config.cache.backend {
        CacheBackend::Memory => "in-memory".to_string(),
        CacheBackend::Redis if config.redis.enabled => format!("redis ({})", config.redis.url),
        CacheBackend::Redis => "disabled".to_string(),
    }
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let addr = config.server.addr();
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api/products", addr);
    info!("Legacy:    http://{}/api/product/GetAll", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!(
        "Cache:     {} (list ttl {}s, item ttl {}s)",
        cache_summary(config),
        config.cache.list_ttl_secs,
        config.cache.item_ttl_secs
    );
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(&AppConfig::default());
    }

    #[test]
    fn test_cache_summary() {
        let mut config = AppConfig::default();
        assert_eq!(cache_summary(&config), "redis (redis://127.0.0.1:6379)");

        config.redis.enabled = false;
        assert_eq!(cache_summary(&config), "disabled");

        config.cache.backend = CacheBackend::Memory;
        assert_eq!(cache_summary(&config), "in-memory");
    }
}
