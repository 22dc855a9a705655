//! Product-related DTOs.

use catalog_core::NewProduct;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating or replacing a product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    #[validate(
        length(max = 255, message = "Name cannot exceed 255 characters"),
        custom(function = "catalog_core::rules::not_blank")
    )]
    pub name: String,

    #[validate(custom(function = "catalog_core::rules::valid_price"))]
    pub price: f64,

    #[serde(default)]
    pub description: String,
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            description: request.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{CatalogError, ValidateExt};

    fn request(name: &str, price: f64) -> ProductRequest {
        ProductRequest {
            name: name.to_string(),
            price,
            description: String::new(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("Pen", 1.5).validate_request().is_ok());
        assert!(request("Free sample", 0.0).validate_request().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = request("   ", 1.5).validate_request().unwrap_err();
        assert!(matches!(err, CatalogError::Validation(ref msg) if msg.contains("name")));
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = request("Pen", -1.0).validate_request().unwrap_err();
        assert!(matches!(err, CatalogError::Validation(ref msg) if msg.contains("price")));
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let req: ProductRequest = serde_json::from_str(r#"{"name":"Pen","price":1.5}"#).unwrap();
        assert_eq!(req.description, "");
    }

    #[test]
    fn test_into_new_product_keeps_name_as_sent() {
        let req = request(" Pen ", 1.5);
        assert!(req.validate_request().is_ok());

        let product = NewProduct::from(req);
        assert_eq!(product.name, " Pen ");
        assert_eq!(product.price, 1.5);
    }
}
