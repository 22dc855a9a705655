//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use catalog_core::CatalogError;
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Prefix of environment variables that override file configuration.
pub const ENV_PREFIX: &str = "CATALOG";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Uncommitted local overrides
    /// 4. Environment variables with `CATALOG_` prefix (`__` between sections)
    pub fn new(config_dir: impl Into<String>) -> Result<Self, CatalogError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, CatalogError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// The previous configuration stays in place if the new one fails to load.
    pub async fn reload(&self) -> Result<(), CatalogError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, CatalogError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var(format!("{ENV_PREFIX}_ENVIRONMENT"))
            .unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_catalog_error)?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_catalog_error)?;
        app_config.app.environment = environment;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), CatalogError> {
        if config.app.environment == "production" && !config.redis.enabled {
            warn!("Redis is disabled in production; every read will hit the database");
        }

        ConfigValidator::validate(config)
            .map_err(|errors| CatalogError::Configuration(format_validation_errors(&errors)))
    }

    /// Gets a specific configuration value by key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_dir", &self.config_dir)
            .finish_non_exhaustive()
    }
}

fn config_error_to_catalog_error(err: ConfigError) -> CatalogError {
    CatalogError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CacheBackend;
    use std::fs;

    fn write_default(dir: &Path, contents: &str) {
        fs::write(dir.join("default.toml"), contents).unwrap();
    }

    #[tokio::test]
    async fn test_missing_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().join("absent").to_string_lossy()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.cache.list_ttl_secs, 60);
    }

    #[tokio::test]
    async fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_default(
            dir.path(),
            "[cache]\nbackend = \"memory\"\nlist_ttl_secs = 5\n\n[server]\nport = 5000\n",
        );

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.cache.backend, CacheBackend::Memory);
        assert_eq!(config.cache.list_ttl_secs, 5);
        assert_eq!(config.cache.item_ttl_secs, 60);
        assert_eq!(config.server.port, 5000);
    }

    #[tokio::test]
    async fn test_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_default(dir.path(), "[cache]\nitem_ttl_secs = 0\n");

        let result = ConfigLoader::new(dir.path().to_string_lossy());
        assert!(matches!(result, Err(CatalogError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        write_default(dir.path(), "[cache]\nlist_ttl_secs = 10\n");
        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();

        write_default(dir.path(), "[cache]\nlist_ttl_secs = 20\n");
        loader.reload().await.unwrap();

        assert_eq!(loader.get_value::<u64>("cache.list_ttl_secs").await, Some(20));
    }

    #[tokio::test]
    async fn test_get_value_unknown_path() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        assert_eq!(loader.get_value::<u64>("cache.nope").await, None);
        assert_eq!(
            loader.get_value::<String>("redis.url").await.as_deref(),
            Some("redis://127.0.0.1:6379")
        );
    }
}
