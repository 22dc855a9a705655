//! Provenance labels for values returned by the catalog.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Where a value handed back to the caller was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum DataSource {
    /// Served from the read cache.
    Cache,
    /// Served from (or written to) the authoritative store.
    Database,
}

impl DataSource {
    /// Returns the label used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cache => "Cache",
            Self::Database => "Database",
        }
    }
}

impl Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value tagged with the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub value: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    #[must_use]
    pub const fn cache(value: T) -> Self {
        Self {
            value,
            source: DataSource::Cache,
        }
    }

    #[must_use]
    pub const fn database(value: T) -> Self {
        Self {
            value,
            source: DataSource::Database,
        }
    }

    /// Maps the value, keeping the source label.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Sourced<U> {
        Sourced {
            value: f(self.value),
            source: self.source,
        }
    }

    /// Returns true if the value came from the cache.
    #[must_use]
    pub const fn is_cached(&self) -> bool {
        matches!(self.source, DataSource::Cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_labels() {
        assert_eq!(
            serde_json::to_string(&DataSource::Cache).unwrap(),
            "\"Cache\""
        );
        assert_eq!(DataSource::Database.to_string(), "Database");
    }

    #[test]
    fn test_map_keeps_source() {
        let sourced = Sourced::cache(2).map(|v| v * 10);
        assert_eq!(sourced.value, 20);
        assert!(sourced.is_cached());
        assert!(!Sourced::database(()).is_cached());
    }
}
