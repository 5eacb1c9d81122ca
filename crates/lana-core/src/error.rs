//! # Error Types
//!
//! Domain-specific error types for lana-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lana-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── PromotionError   - A promotion rule could not be evaluated        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  lana-store errors (separate crate)                                    │
//! │  └── StoreError       - NotFound / InvalidProduct / PromotionFailure   │
//! │                                                                         │
//! │  lana-api errors (in app)                                              │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Client    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, basket id, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product code is not in the catalog.
    ///
    /// ## When This Occurs
    /// - A client adds an item with an unknown code (`"Rocket Fuel"`)
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Adding to a line item would overflow its quantity.
    #[error("Quantity for {code} would overflow: {current} + {requested}")]
    QuantityOverflow {
        code: String,
        current: i64,
        requested: i64,
    },

    /// Basket subtotal does not fit in the money type.
    #[error("Basket total overflowed")]
    TotalOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Promotion evaluation failed (wraps PromotionError).
    #[error("Promotion error: {0}")]
    Promotion(#[from] PromotionError),
}

// =============================================================================
// Promotion Error
// =============================================================================

/// A promotion rule could not produce its discounts.
///
/// Promotions are configuration, so every variant here is a programmer or
/// config error rather than a transient failure. The whole total
/// computation is aborted when one is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromotionError {
    /// `buy_qty` of a buy-X-get-Y rule is zero or negative.
    #[error("Promotion for {code} has invalid buy quantity {buy_qty}")]
    InvalidBuyQuantity { code: String, buy_qty: i64 },

    /// `free_qty` of a buy-X-get-Y rule is zero or negative.
    #[error("Promotion for {code} has invalid free quantity {free_qty}")]
    InvalidFreeQuantity { code: String, free_qty: i64 },

    /// Percentage outside 1..=100.
    #[error("Promotion for {code} has invalid percentage {percent}%")]
    InvalidPercentage { code: String, percent: u32 },

    /// Discount amount does not fit in the money type.
    #[error("Discount for {code} overflowed")]
    Overflow { code: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before any basket is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("Rocket Fuel".to_string());
        assert_eq!(err.to_string(), "Product not found: Rocket Fuel");

        let err = CoreError::QuantityOverflow {
            code: "PEN".to_string(),
            current: i64::MAX,
            requested: 1,
        };
        assert!(err.to_string().starts_with("Quantity for PEN would overflow"));
    }

    #[test]
    fn test_promotion_error_messages() {
        let err = PromotionError::InvalidPercentage {
            code: "TSHIRT".to_string(),
            percent: 150,
        };
        assert_eq!(
            err.to_string(),
            "Promotion for TSHIRT has invalid percentage 150%"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBeNonNegative {
            field: "count".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_promotion_converts_to_core_error() {
        let err: CoreError = PromotionError::Overflow {
            code: "PEN".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::Promotion(_)));
    }
}
