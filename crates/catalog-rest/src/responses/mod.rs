//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::{CatalogError, DataSource, ErrorResponse, FieldError, Sourced};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::error;
use utoipa::ToSchema;

/// Default message of a successful response.
pub const MSG_SUCCESS: &str = "Request successful";
pub const MSG_CREATED: &str = "Product created";
pub const MSG_UPDATED: &str = "Product updated";
pub const MSG_DELETED: &str = "Product deleted";

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    /// Time spent handling the request, in milliseconds.
    pub response_time_ms: u64,
    /// Where the data was read from.
    pub source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn success(data: T, source: DataSource, message: &str, response_time_ms: u64) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
            response_time_ms,
            source,
            error: None,
        }
    }

    /// Creates an error response.
    #[must_use]
    pub fn error(message: String, error: ErrorResponse, response_time_ms: u64) -> Self {
        Self {
            success: false,
            message,
            data: None,
            response_time_ms,
            source: DataSource::Database,
            error: Some(error),
        }
    }
}

/// Wall-clock timer started when a handler begins.
#[derive(Debug, Clone, Copy)]
pub struct RequestTimer(Instant);

impl RequestTimer {
    #[must_use]
    pub fn start() -> Self {
        Self(Instant::now())
    }

    /// Milliseconds since the timer started.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.0.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError {
    pub error: CatalogError,
    pub response_time_ms: u64,
    pub details: Option<Vec<FieldError>>,
}

impl AppError {
    #[must_use]
    pub fn new(error: CatalogError, timer: &RequestTimer) -> Self {
        Self {
            error,
            response_time_ms: timer.elapsed_ms(),
            details: None,
        }
    }

    /// Attaches field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }

    fn message(&self) -> String {
        match &self.error {
            CatalogError::NotFound { resource_type, .. } => format!("{} not found", resource_type),
            other => other.to_string(),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        Self {
            error,
            response_time_ms: 0,
            details: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self.error);
        }

        let message = self.message();
        let mut error_response = ErrorResponse::from_error(&self.error);
        if let Some(details) = self.details {
            error_response = error_response.with_details(details);
        }

        let body = Json(ApiResponse::<()>::error(
            message,
            error_response,
            self.response_time_ms,
        ));

        (status, body).into_response()
    }
}

/// Stamps errors with the elapsed request time.
pub trait TimedResultExt<T> {
    fn timed(self, timer: &RequestTimer) -> Result<T, AppError>;
}

impl<T> TimedResultExt<T> for Result<T, CatalogError> {
    fn timed(self, timer: &RequestTimer) -> Result<T, AppError> {
        self.map_err(|e| AppError::new(e, timer))
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Helper to create a success response from a labelled value.
pub fn ok<T: Serialize>(sourced: Sourced<T>, message: &str, timer: &RequestTimer) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(
        sourced.value,
        sourced.source,
        message,
        timer.elapsed_ms(),
    )))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(
    sourced: Sourced<T>,
    timer: &RequestTimer,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            sourced.value,
            sourced.source,
            MSG_CREATED,
            timer.elapsed_ms(),
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_is_camel_case() {
        let response = ApiResponse::success(1, DataSource::Cache, MSG_SUCCESS, 3);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Request successful");
        assert_eq!(json["responseTimeMs"], 3);
        assert_eq!(json["source"], "Cache");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_has_null_data() {
        let err = CatalogError::not_found("Product", 4);
        let response = ApiResponse::<()>::error(
            "Product not found".to_string(),
            ErrorResponse::from_error(&err),
            0,
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["source"], "Database");
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_not_found_message() {
        let err = AppError::from(CatalogError::not_found("Product", 4));
        assert_eq!(err.message(), "Product not found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_is_500() {
        let err = AppError::from(CatalogError::Database("down".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
