//! # Pricing
//!
//! Turns a set of line items plus a promotion sequence into a payable total.
//!
//! ```text
//! total = Σ(unit_price × quantity) − Σ(discount.amount)
//! ```
//!
//! The computation is a pure function of its inputs, so two calls on the same
//! basket state always agree to the cent.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::{evaluate_all, Discount, Promotion};
use crate::types::LineItem;

/// Result of pricing a basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Sum of line totals before promotions.
    pub subtotal: Money,
    /// Discount lines, in promotion order.
    pub discounts: Vec<Discount>,
    /// `subtotal` minus every discount.
    pub total: Money,
}

impl Totals {
    /// Sum of all discount amounts.
    pub fn discount_total(&self) -> Money {
        self.discounts.iter().map(|d| d.amount).sum()
    }
}

/// Prices `items` under `promotions`.
///
/// ## Errors
/// - [`CoreError::Promotion`] from the first failing promotion; no partial
///   total is returned
/// - [`CoreError::TotalOverflow`] when line totals exceed the money range
pub fn price_items(
    items: &HashMap<String, LineItem>,
    promotions: &[Promotion],
) -> CoreResult<Totals> {
    let mut subtotal = Money::zero();
    for item in items.values() {
        subtotal = item
            .product
            .price
            .checked_multiply_quantity(item.quantity)
            .and_then(|line| subtotal.checked_add(line))
            .ok_or(CoreError::TotalOverflow)?;
    }

    let discounts = evaluate_all(promotions, items)?;

    let mut total = subtotal;
    for discount in &discounts {
        total = Money::from_cents(
            total
                .cents()
                .checked_sub(discount.amount.cents())
                .ok_or(CoreError::TotalOverflow)?,
        );
    }

    Ok(Totals {
        subtotal,
        discounts,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
