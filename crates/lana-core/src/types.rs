//! # Domain Types
//!
//! Line items held inside a basket and the DTO exchanged with callers.
//!
//! ## Snapshot Pattern
//! A `LineItem` owns a copy of the catalog `Product`, so the price and name
//! used for totals and discount descriptions are the ones seen when the item
//! was first added.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// A (product, quantity) pair within a basket.
///
/// ## Invariants
/// - `quantity >= 0`
/// - One line item per product code (adding the same code accumulates)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product: Product,
    pub quantity: i64,
}

impl LineItem {
    pub fn new(product: Product, quantity: i64) -> Self {
        LineItem { product, quantity }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }

    /// Returns the quantity this line would have after adding `amount`,
    /// without modifying it.
    pub fn accumulated(&self, amount: i64) -> CoreResult<i64> {
        self.quantity
            .checked_add(amount)
            .ok_or_else(|| CoreError::QuantityOverflow {
                code: self.product.code.clone(),
                current: self.quantity,
                requested: amount,
            })
    }

    /// Converts to the wire representation.
    pub fn to_product_item(&self) -> ProductItem {
        ProductItem {
            product: self.product.code.clone(),
            count: self.quantity,
        }
    }
}

// =============================================================================
// Product Item (DTO)
// =============================================================================

/// Basket entry as exchanged with callers.
///
/// Used both as the add-item request (`count` = amount to add) and as an
/// entry of the item listing (`count` = current quantity).
///
/// ```json
/// { "product": "MUG", "count": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductItem {
    pub product: String,
    pub count: i64,
}

impl ProductItem {
    pub fn new(product: impl Into<String>, count: i64) -> Self {
        ProductItem {
            product: product.into(),
            count,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
