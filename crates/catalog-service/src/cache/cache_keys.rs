//! Cache keys and expiry policy for the product catalog.
//!
//! The read path and the invalidation path both build keys here, so a key
//! that is populated is always the key that gets invalidated.

use catalog_config::CacheConfig;
use catalog_core::ProductId;
use std::time::Duration;

/// Default TTL for cached entries (1 minute).
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Key of the aggregate product list entry.
pub const PRODUCT_LIST_KEY: &str = "products";

/// Key of the aggregate product list entry.
#[must_use]
pub fn product_list() -> String {
    PRODUCT_LIST_KEY.to_string()
}

/// Key of a single product entry.
#[must_use]
pub fn product_by_id(id: ProductId) -> String {
    format!("product_{}", id)
}

/// Expiry applied when a read repopulates the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    list_ttl: Duration,
    item_ttl: Duration,
}

impl CachePolicy {
    #[must_use]
    pub const fn new(list_ttl: Duration, item_ttl: Duration) -> Self {
        Self { list_ttl, item_ttl }
    }

    /// TTL of the aggregate list entry.
    #[must_use]
    pub const fn list_ttl(&self) -> Duration {
        self.list_ttl
    }

    /// TTL of a single product entry.
    #[must_use]
    pub const fn item_ttl(&self) -> Duration {
        self.item_ttl
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_TTL)
    }
}

impl From<&CacheConfig> for CachePolicy {
    fn from(config: &CacheConfig) -> Self {
        Self::new(config.list_ttl(), config.item_ttl())
    }
}

/// A committed write to the product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductMutation {
    Created,
    Updated(ProductId),
    Deleted(ProductId),
}

impl ProductMutation {
    /// Keys that must be deleted once the write has committed.
    ///
    /// A new product cannot have an item entry yet, so creation only drops
    /// the list.
    #[must_use]
    pub fn invalidated_keys(&self) -> Vec<String> {
        match self {
            Self::Created => vec![product_list()],
            Self::Updated(id) | Self::Deleted(id) => vec![product_list(), product_by_id(*id)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_keys() {
        assert_eq!(product_list(), "products");
        assert_eq!(product_by_id(ProductId::new(15)), "product_15");
    }

    #[test]
    fn test_invalidated_keys() {
        assert_eq!(ProductMutation::Created.invalidated_keys(), ["products"]);
        assert_eq!(
            ProductMutation::Updated(ProductId::new(3)).invalidated_keys(),
            ["products", "product_3"]
        );
        assert_eq!(
            ProductMutation::Deleted(ProductId::new(4)).invalidated_keys(),
            ["products", "product_4"]
        );
    }

    #[test]
    fn test_policy_from_config() {
        let config = CacheConfig {
            list_ttl_secs: 30,
            item_ttl_secs: 90,
            ..CacheConfig::default()
        };
        let policy = CachePolicy::from(&config);
        assert_eq!(policy.list_ttl(), Duration::from_secs(30));
        assert_eq!(policy.item_ttl(), Duration::from_secs(90));
        assert_eq!(CachePolicy::default().item_ttl(), DEFAULT_TTL);
    }
}
