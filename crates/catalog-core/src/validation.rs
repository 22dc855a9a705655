//! Validation utilities.

use crate::{CatalogError, FieldError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `CatalogError` on failure.
    fn validate_request(&self) -> Result<(), CatalogError> {
        self.validate().map_err(validation_errors_to_catalog_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

/// Converts `validator::ValidationErrors` to `CatalogError`.
#[must_use]
pub fn validation_errors_to_catalog_error(errors: ValidationErrors) -> CatalogError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    CatalogError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use std::borrow::Cow;
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank")
                .with_message(Cow::Borrowed("must not be blank")));
        }
        Ok(())
    }

    /// Validates that a price is a finite, non-negative amount.
    pub fn valid_price(price: f64) -> Result<(), ValidationError> {
        if !price.is_finite() {
            return Err(ValidationError::new("price_not_finite")
                .with_message(Cow::Borrowed("must be a finite number")));
        }
        if price < 0.0 {
            return Err(ValidationError::new("price_negative")
                .with_message(Cow::Borrowed("must not be negative")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_valid_price() {
        assert!(valid_price(0.0).is_ok());
        assert!(valid_price(1.5).is_ok());
        assert!(valid_price(-0.01).is_err());
        assert!(valid_price(f64::NAN).is_err());
        assert!(valid_price(f64::INFINITY).is_err());
    }
}
