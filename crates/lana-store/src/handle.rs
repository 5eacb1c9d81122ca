//! # Basket Handle
//!
//! The public face of a basket. This is the only way callers outside the
//! store read or change basket contents.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  handle.add_item(PEN × 2)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  registry.read() ── id missing? ──► Err(NotFound)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  basket.items.write() ── accumulate ──► Ok(new quantity)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  both guards released                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A handle carries nothing but the id and the store it came from, so it
//! can be cloned freely and outlive the basket; every call re-resolves the
//! id.

use std::sync::Arc;

use lana_core::{Discount, Money, ProductItem, Totals};
use tracing::{debug, warn};

use crate::error::{ErrorClass, StoreError, StoreResult};
use crate::registry::BasketStore;

/// Reference to a basket in a [`BasketStore`].
#[derive(Debug, Clone)]
pub struct BasketHandle {
    id: String,
    store: Arc<BasketStore>,
}

impl BasketHandle {
    pub(crate) fn new(id: String, store: Arc<BasketStore>) -> Self {
        BasketHandle { id, store }
    }

    /// Basket identifier, for future lookups.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current line items as `{product, count}` pairs. Order is unspecified.
    pub fn items(&self) -> StoreResult<Vec<ProductItem>> {
        self.store.with_basket(&self.id, |basket| Ok(basket.items()))
    }

    /// Adds `item.count` units of `item.product` and returns the resulting
    /// quantity of that product.
    ///
    /// ## Errors
    /// - `NotFound` if the basket no longer exists
    /// - `InvalidProduct` if the catalog doesn't carry the product
    /// - `InvalidQuantity` for a negative count or a quantity overflow
    ///
    /// On error the basket is left untouched.
    pub fn add_item(&self, item: &ProductItem) -> StoreResult<i64> {
        let result = self.store.with_basket(&self.id, |basket| {
            basket
                .add_item(self.store.catalog(), &item.product, item.count)
                .map_err(StoreError::from)
        });

        match &result {
            Ok(quantity) => debug!(
                basket_id = %self.id,
                product = %item.product,
                count = item.count,
                quantity = *quantity,
                "Item added"
            ),
            Err(StoreError::NotFound(_)) => {}
            Err(e) => warn!(
                basket_id = %self.id,
                product = %item.product,
                error = %e,
                "Item rejected"
            ),
        }
        result
    }

    /// Subtotal, discount lines and payable total, computed together.
    pub fn totals(&self) -> StoreResult<Totals> {
        let result = self
            .store
            .with_basket(&self.id, |basket| basket.totals().map_err(StoreError::from));

        if let Err(e) = &result {
            if e.class() == ErrorClass::Internal {
                warn!(basket_id = %self.id, error = %e, "Total computation failed");
            }
        }
        result
    }

    /// Amount to be paid for the basket after promotions.
    pub fn total(&self) -> StoreResult<Money> {
        self.totals().map(|totals| totals.total)
    }

    /// Discount lines the basket's promotions currently grant.
    pub fn discounts(&self) -> StoreResult<Vec<Discount>> {
        self.totals().map(|totals| totals.discounts)
    }

    /// Items and totals observed at the same instant.
    pub fn snapshot(&self) -> StoreResult<BasketSnapshot> {
        let result = self.store.with_basket(&self.id, |basket| {
            basket.snapshot().map_err(StoreError::from)
        });

        match result {
            Ok((items, totals)) => Ok(BasketSnapshot {
                id: self.id.clone(),
                items,
                totals,
            }),
            Err(e) => {
                if e.class() == ErrorClass::Internal {
                    warn!(basket_id = %self.id, error = %e, "Total computation failed");
                }
                Err(e)
            }
        }
    }
}

/// Consistent view of a basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketSnapshot {
    pub id: String,
    pub items: Vec<ProductItem>,
    pub totals: Totals,
}
