//! Validated JSON extractor for automatic request validation.
//!
//! Deserializes the body and validates it with the `validator` crate.
//! Malformed JSON and failed validation are both answered with a 400 in the
//! standard response envelope, the latter with field-level details.

use crate::responses::{AppError, RequestTimer};
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use catalog_core::{field_errors, validation_errors_to_catalog_error, CatalogError};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that validates the deserialized value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let timer = RequestTimer::start();

        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            AppError::new(
                CatalogError::validation(format!("Invalid JSON: {}", rejection.body_text())),
                &timer,
            )
        })?;

        if let Err(errors) = value.validate() {
            let details = field_errors(&errors);
            return Err(
                AppError::new(validation_errors_to_catalog_error(errors), &timer)
                    .with_details(details),
            );
        }

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, response::IntoResponse};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestRequest {
        #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
        name: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let ValidatedJson(req) =
            ValidatedJson::<TestRequest>::from_request(json_request(r#"{"name":"Pen"}"#), &())
                .await
                .unwrap();
        assert_eq!(req.name, "Pen");
    }

    #[tokio::test]
    async fn test_invalid_field_has_details() {
        let err = ValidatedJson::<TestRequest>::from_request(json_request(r#"{"name":"ab"}"#), &())
            .await
            .unwrap_err();

        let details = err.details.clone().unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "name");
        assert_eq!(details[0].message, "Name must be at least 3 characters");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let err = ValidatedJson::<TestRequest>::from_request(json_request("{"), &())
            .await
            .unwrap_err();

        assert!(matches!(err.error, CatalogError::Validation(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
