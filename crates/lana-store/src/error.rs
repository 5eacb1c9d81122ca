//! # Store Error Types
//!
//! The error kinds a caller of the basket store can observe.
//!
//! ## Error Classes
//! ```text
//! ┌────────────────────┬──────────────────────┬──────────────────────────┐
//! │ StoreError         │ ErrorClass           │ Typical HTTP mapping     │
//! ├────────────────────┼──────────────────────┼──────────────────────────┤
//! │ NotFound           │ MissingResource      │ 404                      │
//! │ InvalidProduct     │ InvalidInput         │ 400                      │
//! │ InvalidQuantity    │ InvalidInput         │ 400                      │
//! │ PromotionFailure   │ Internal             │ 500                      │
//! │ TotalOverflow      │ Internal             │ 500                      │
//! └────────────────────┴──────────────────────┴──────────────────────────┘
//! ```
//!
//! Every error is terminal for the operation that raised it. None of them is
//! transient, so nothing here is worth retrying.

use lana_core::{CoreError, PromotionError};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by [`BasketStore`](crate::BasketStore) and
/// [`BasketHandle`](crate::BasketHandle).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No basket with this id is registered.
    #[error("Basket not found")]
    NotFound(String),

    /// Product code unknown to the catalog. The basket is unchanged.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Negative amount, or an amount that would overflow the line quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A promotion rule failed; no total was produced.
    #[error("Promotion failure: {0}")]
    PromotionFailure(#[from] PromotionError),

    /// The basket subtotal does not fit in the money type.
    #[error("Basket total overflowed")]
    TotalOverflow,
}

/// Coarse classification of [`StoreError`] for boundary layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    MissingResource,
    InvalidInput,
    Internal,
}

impl StoreError {
    pub fn class(&self) -> ErrorClass {
        match self {
            StoreError::NotFound(_) => ErrorClass::MissingResource,
            StoreError::InvalidProduct(_) | StoreError::InvalidQuantity(_) => {
                ErrorClass::InvalidInput
            }
            StoreError::PromotionFailure(_) | StoreError::TotalOverflow => ErrorClass::Internal,
        }
    }
}

impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(code) => StoreError::InvalidProduct(code),
            err @ CoreError::QuantityOverflow { .. } => StoreError::InvalidQuantity(err.to_string()),
            CoreError::Validation(e) => StoreError::InvalidQuantity(e.to_string()),
            CoreError::Promotion(e) => StoreError::PromotionFailure(e),
            CoreError::TotalOverflow => StoreError::TotalOverflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lana_core::ValidationError;

    #[test]
    fn test_not_found_message() {
        // Clients match on this exact text
        let err = StoreError::NotFound("123".to_string());
        assert_eq!(err.to_string(), "Basket not found");
    }

    #[test]
    fn test_core_error_mapping() {
        let err: StoreError = CoreError::ProductNotFound("Rocket Fuel".to_string()).into();
        assert_eq!(err, StoreError::InvalidProduct("Rocket Fuel".to_string()));

        let err: StoreError = CoreError::Validation(ValidationError::MustBeNonNegative {
            field: "count".to_string(),
        })
        .into();
        assert_eq!(
            err,
            StoreError::InvalidQuantity("count must not be negative".to_string())
        );

        let promotion = PromotionError::Overflow {
            code: "PEN".to_string(),
        };
        let err: StoreError = CoreError::Promotion(promotion.clone()).into();
        assert_eq!(err, StoreError::PromotionFailure(promotion));
    }

    #[test]
    fn test_error_classes() {
        assert_eq!(
            StoreError::NotFound("x".into()).class(),
            ErrorClass::MissingResource
        );
        assert_eq!(
            StoreError::InvalidProduct("x".into()).class(),
            ErrorClass::InvalidInput
        );
        assert_eq!(
            StoreError::InvalidQuantity("x".into()).class(),
            ErrorClass::InvalidInput
        );
        assert_eq!(StoreError::TotalOverflow.class(), ErrorClass::Internal);
    }
}
