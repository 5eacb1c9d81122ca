//! # Promotion Engine
//!
//! Discount rules evaluated against a basket's line items.
//!
//! ## Evaluation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Basket Total Computation                            │
//! │                                                                         │
//! │  items ──► Σ unit_price × quantity ─────────────────┐  raw total       │
//! │    │                                                 │                  │
//! │    ├──► promotions[0].evaluate(items) ──► discounts ─┤                  │
//! │    ├──► promotions[1].evaluate(items) ──► discounts ─┤  (subtracted)    │
//! │    └──► ...                                          │                  │
//! │                                                      ▼                  │
//! │                                                payable total           │
//! │                                                                         │
//! │  First Err(PromotionError) aborts the whole computation.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Promotions are plain values: they hold no state, never touch the items
//! they inspect, and can be shared by every basket.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{PEN, TSHIRT};
use crate::error::PromotionError;
use crate::money::Money;
use crate::types::LineItem;

// =============================================================================
// Discount
// =============================================================================

/// A named deduction from the raw basket total.
///
/// Produced fresh on every evaluation; never stored in a basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub description: String,
    pub amount: Money,
}

// =============================================================================
// Promotion
// =============================================================================

/// A discount rule.
///
/// ## Variants
/// ```text
/// ┌────────────────────────┬──────────────────────────────────────────────┐
/// │ BuyXGetYFree           │ every `buy_qty` units, `free_qty` are free    │
/// │   PEN, 2, 1            │ 5 pens → 2 × 1 free = €10.00 off              │
/// ├────────────────────────┼──────────────────────────────────────────────┤
/// │ BulkPercentageOff      │ at `min_qty` or more units, `percent` off     │
/// │   TSHIRT, 3, 25        │ EVERY unit, not only those above the minimum  │
/// └────────────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Promotion {
    BuyXGetYFree {
        product_code: String,
        buy_qty: i64,
        free_qty: i64,
    },
    BulkPercentageOff {
        product_code: String,
        min_qty: i64,
        percent: u32,
    },
}

impl Promotion {
    pub fn buy_x_get_y_free(product_code: impl Into<String>, buy_qty: i64, free_qty: i64) -> Self {
        Promotion::BuyXGetYFree {
            product_code: product_code.into(),
            buy_qty,
            free_qty,
        }
    }

    pub fn bulk_percentage_off(product_code: impl Into<String>, min_qty: i64, percent: u32) -> Self {
        Promotion::BulkPercentageOff {
            product_code: product_code.into(),
            min_qty,
            percent,
        }
    }

    /// The promotions every new Lana basket starts with:
    /// buy 2 pens get 1 free, and 25% off 3 or more t-shirts.
    pub fn default_set() -> Vec<Promotion> {
        vec![
            Promotion::buy_x_get_y_free(PEN, 2, 1),
            Promotion::bulk_percentage_off(TSHIRT, 3, 25),
        ]
    }

    /// Product the rule applies to.
    pub fn product_code(&self) -> &str {
        match self {
            Promotion::BuyXGetYFree { product_code, .. }
            | Promotion::BulkPercentageOff { product_code, .. } => product_code,
        }
    }

    /// Checks the rule parameters without looking at any basket.
    pub fn validate(&self) -> Result<(), PromotionError> {
        match self {
            Promotion::BuyXGetYFree {
                product_code,
                buy_qty,
                free_qty,
            } => {
                if *buy_qty <= 0 {
                    return Err(PromotionError::InvalidBuyQuantity {
                        code: product_code.clone(),
                        buy_qty: *buy_qty,
                    });
                }
                if *free_qty <= 0 {
                    return Err(PromotionError::InvalidFreeQuantity {
                        code: product_code.clone(),
                        free_qty: *free_qty,
                    });
                }
                Ok(())
            }
            Promotion::BulkPercentageOff {
                product_code,
                percent,
                ..
            } => {
                if *percent == 0 || *percent > 100 {
                    return Err(PromotionError::InvalidPercentage {
                        code: product_code.clone(),
                        percent: *percent,
                    });
                }
                Ok(())
            }
        }
    }

    /// Computes the discounts this rule grants on `items`.
    ///
    /// Returns an empty list when the product is absent or below the
    /// threshold. A misconfigured rule fails even on an empty basket.
    pub fn evaluate(&self, items: &HashMap<String, LineItem>) -> Result<Vec<Discount>, PromotionError> {
        self.validate()?;

        let Some(item) = items.get(self.product_code()) else {
            return Ok(Vec::new());
        };

        match self {
            Promotion::BuyXGetYFree {
                product_code,
                buy_qty,
                free_qty,
            } => {
                if item.quantity < *buy_qty {
                    return Ok(Vec::new());
                }
                let multiples = item.quantity / buy_qty;
                let amount = free_qty
                    .checked_mul(multiples)
                    .and_then(|free_units| item.product.price.checked_multiply_quantity(free_units))
                    .ok_or_else(|| PromotionError::Overflow {
                        code: product_code.clone(),
                    })?;

                Ok(vec![Discount {
                    description: format!(
                        "Buy {} {} and get {} Free",
                        buy_qty, item.product.name, free_qty
                    ),
                    amount,
                }])
            }
            Promotion::BulkPercentageOff {
                product_code,
                min_qty,
                percent,
            } => {
                if item.quantity < *min_qty {
                    return Ok(Vec::new());
                }
                let amount = item
                    .product
                    .price
                    .checked_multiply_quantity(item.quantity)
                    .ok_or_else(|| PromotionError::Overflow {
                        code: product_code.clone(),
                    })?
                    .percentage(*percent);

                Ok(vec![Discount {
                    description: format!(
                        "Buy {} or more {} get {}% off",
                        min_qty, item.product.name, percent
                    ),
                    amount,
                }])
            }
        }
    }
}

/// Evaluates `promotions` in order and concatenates their discounts.
///
/// Stops at the first failing promotion; discounts gathered so far are
/// dropped.
pub fn evaluate_all(
    promotions: &[Promotion],
    items: &HashMap<String, LineItem>,
) -> Result<Vec<Discount>, PromotionError> {
    let mut discounts = Vec::new();
    for promotion in promotions {
        discounts.extend(promotion.evaluate(items)?);
    }
    Ok(discounts)
}

// =============================================================================
// Unit Tests
// =============================================================================
