//! Configuration validation module.
//!
//! Checks every section up front so a bad value fails the process at startup
//! instead of surfacing on the first request.

use crate::AppConfig;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout or TTL value must be positive.
    NonPositiveDuration { name: String },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {}: {} (must be 1-65535)", name, value)
            }
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({}) cannot be greater than max ({})",
                    min, max
                )
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Pool size {} exceeds maximum allowed ({})", value, maximum)
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::NonPositiveDuration { name } => {
                write!(f, "{} must be greater than zero", name)
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level '{}' (expected trace, debug, info, warn or error)",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Result of configuration validation containing all errors found.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<ConfigValidationError>,
}

impl ValidationResult {
    fn add_error(&mut self, error: ConfigValidationError) {
        self.errors.push(error);
    }

    fn require_positive(&mut self, name: &str, value: u64) {
        if value == 0 {
            self.add_error(ConfigValidationError::NonPositiveDuration {
                name: name.to_string(),
            });
        }
    }

    /// Returns true if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the validation errors.
    #[must_use]
    pub fn errors(&self) -> &[ConfigValidationError] {
        &self.errors
    }

    /// Converts to Result, returning Err with all errors if any exist.
    pub fn into_result(self) -> Result<(), Vec<ConfigValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 1000;
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut result = ValidationResult::default();

        Self::validate_server(&config.server, &mut result);
        Self::validate_database(&config.database, &mut result);
        Self::validate_redis(&config.redis, &mut result);
        Self::validate_cache(&config.cache, &mut result);
        Self::validate_observability(&config.observability, &mut result);

        result.into_result()
    }

    fn validate_server(config: &crate::ServerConfig, result: &mut ValidationResult) {
        if config.port == 0 {
            result.add_error(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: config.port,
            });
        }
        result.require_positive("server.request_timeout_secs", config.request_timeout_secs);
    }

    fn validate_database(config: &crate::DatabaseConfig, result: &mut ValidationResult) {
        if config.url.is_empty() {
            result.add_error(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if !config.url.starts_with("mysql://") {
            result.add_error(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL must start with mysql://".to_string(),
            });
        }

        if config.min_connections > config.max_connections {
            result.add_error(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.max_connections > Self::MAX_POOL_SIZE {
            result.add_error(ConfigValidationError::PoolSizeTooLarge {
                value: config.max_connections,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        result.require_positive("database.connect_timeout_secs", config.connect_timeout_secs);
        result.require_positive("database.idle_timeout_secs", config.idle_timeout_secs);
    }

    fn validate_redis(config: &crate::RedisConfig, result: &mut ValidationResult) {
        if !config.enabled {
            return;
        }

        match Url::parse(&config.url) {
            Ok(url) if matches!(url.scheme(), "redis" | "rediss") => {}
            Ok(_) => result.add_error(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: "URL must start with redis:// or rediss://".to_string(),
            }),
            Err(e) => result.add_error(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: e.to_string(),
            }),
        }

        if config.pool_size > Self::MAX_POOL_SIZE {
            result.add_error(ConfigValidationError::PoolSizeTooLarge {
                value: config.pool_size,
                maximum: Self::MAX_POOL_SIZE,
            });
        }
    }

    fn validate_cache(config: &crate::CacheConfig, result: &mut ValidationResult) {
        result.require_positive("cache.list_ttl_secs", config.list_ttl_secs);
        result.require_positive("cache.item_ttl_secs", config.item_ttl_secs);
    }

    fn validate_observability(config: &crate::ObservabilityConfig, result: &mut ValidationResult) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            result.add_error(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }
    }
}

/// Formats validation errors for display.
#[must_use]
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_passes() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigValidationError::InvalidPort { .. })));
    }

    #[test]
    fn test_invalid_pool_size() {
        let mut config = AppConfig::default();
        config.database.min_connections = 20;
        config.database.max_connections = 5;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigValidationError::InvalidPoolSize { min: 20, max: 5 })));
    }

    #[test]
    fn test_invalid_database_url() {
        let mut config = AppConfig::default();
        config.database.url = "sqlserver://localhost".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigValidationError::InvalidUrl { url_type, .. } if url_type == "database"
        )));
    }

    #[test]
    fn test_invalid_redis_url() {
        let mut config = AppConfig::default();
        config.redis.url = "http://localhost:6379".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigValidationError::InvalidUrl { url_type, .. } if url_type == "redis"
        )));
    }

    #[test]
    fn test_disabled_redis_skips_url_check() {
        let mut config = AppConfig::default();
        config.redis.enabled = false;
        config.redis.url = String::new();

        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let mut config = AppConfig::default();
        config.cache.list_ttl_secs = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigValidationError::NonPositiveDuration {
                name: "cache.list_ttl_secs".to_string()
            }]
        );
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AppConfig::default();
        config.observability.log_level = "verbose".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigValidationError::InvalidLogLevel { .. })));
    }

    #[test]
    fn test_multiple_errors() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config.cache.item_ttl_secs = 0;
        config.observability.log_level = "loud".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_format_validation_errors() {
        let errors = vec![
            ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: 0,
            },
            ConfigValidationError::NonPositiveDuration {
                name: "cache.item_ttl_secs".to_string(),
            },
        ];
        let formatted = format_validation_errors(&errors);
        assert!(formatted.contains("Configuration validation failed"));
        assert!(formatted.contains("1. Invalid port for server.port"));
        assert!(formatted.contains("2. cache.item_ttl_secs must be greater than zero"));
    }
}
