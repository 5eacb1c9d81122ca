//! # Validation Module
//!
//! Input validation for basket operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP boundary (lana-api)                                      │
//! │  └── Type validation (JSON deserialization)                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Basket (lana-store)                                           │
//! │  ├── Basket existence (registry lookup)                                 │
//! │  ├── THIS MODULE: range checks                                          │
//! │  └── Catalog lookup before any mutation                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lana_core::validation::validate_add_quantity;
//!
//! assert!(validate_add_quantity(3).is_ok());
//! assert!(validate_add_quantity(-1).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates the amount of an add-item request.
///
/// Zero is accepted: it registers the product with quantity 0, which is
/// what repeated adds then accumulate onto.
pub fn validate_add_quantity(amount: i64) -> ValidationResult<()> {
    if amount < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "count".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
