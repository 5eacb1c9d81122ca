//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Handler                                                                │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  StoreError::NotFound ────────────► 404 NOT_FOUND                       │
//! │  StoreError::InvalidProduct ──────► 400 VALIDATION_ERROR                │
//! │  StoreError::InvalidQuantity ─────► 400 VALIDATION_ERROR                │
//! │  Malformed JSON body ─────────────► 400 VALIDATION_ERROR                │
//! │  PromotionFailure / overflow ─────► 500 INTERNAL (message hidden)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! ```json
//! {
//!   "code": "NOT_FOUND",
//!   "message": "Basket not found"
//! }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lana_store::{ErrorClass, StoreError};
use serde::Serialize;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match (err.class(), &err) {
            (ErrorClass::MissingResource, _) => ApiError::not_found(err.to_string()),
            (ErrorClass::InvalidInput, StoreError::InvalidProduct(_)) => {
                ApiError::validation("Invalid product")
            }
            (ErrorClass::InvalidInput, _) => ApiError::validation(err.to_string()),
            (ErrorClass::Internal, _) => {
                // Log the actual error but return a generic message
                tracing::error!(error = %err, "Basket total could not be computed");
                ApiError::internal("Internal server error")
            }
        }
    }
}

/// Any body the JSON extractor refuses is a client error.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
