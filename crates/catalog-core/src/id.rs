//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::num::ParseIntError;

/// A strongly-typed wrapper for product IDs.
///
/// Product identifiers are assigned by the backing store on insert, so there
/// is no constructor that invents a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct ProductId(pub i32);

impl ProductId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parses a product ID from a string.
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self(s.trim().parse()?))
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_parsing() {
        assert_eq!(ProductId::parse("42").unwrap(), ProductId::new(42));
        assert_eq!(ProductId::parse(" 7 ").unwrap(), ProductId::new(7));
        assert!(ProductId::parse("abc").is_err());
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(15).to_string(), "15");
    }

    #[test]
    fn test_product_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
