//! Product entity.

use crate::{Entity, ProductId};
use serde::{Deserialize, Serialize};

/// A product row owned by the backing store.
///
/// Cached copies are plain serialized snapshots of this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    /// Identifier assigned by the backing store.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// Field values for a product that has not been stored yet, or the
/// replacement values for an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Builds the stored entity once the store has assigned an identifier.
    #[must_use]
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            price: new.price,
            description: new.description,
        }
    }

    /// Overwrites name, price and description. The identifier never changes.
    pub fn apply_changes(&mut self, changes: NewProduct) {
        self.name = changes.name;
        self.price = changes.price;
        self.description = changes.description;
    }
}

impl Entity<ProductId> for Product {
    fn id(&self) -> &ProductId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> NewProduct {
        NewProduct {
            name: "Pen".to_string(),
            price: 1.5,
            description: String::new(),
        }
    }

    #[test]
    fn test_from_new_keeps_fields() {
        let product = Product::from_new(ProductId::new(9), pen());
        assert_eq!(*product.id(), ProductId::new(9));
        assert_eq!(product.name, "Pen");
        assert!((product.price - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_changes_keeps_id() {
        let mut product = Product::from_new(ProductId::new(3), pen());
        product.apply_changes(NewProduct {
            name: "Marker".to_string(),
            price: 2.0,
            description: "Permanent".to_string(),
        });
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.name, "Marker");
        assert_eq!(product.description, "Permanent");
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let product: Product =
            serde_json::from_str(r#"{"id":1,"name":"Pen","price":1.5}"#).unwrap();
        assert_eq!(product.description, "");
    }
}
