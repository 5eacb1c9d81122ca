//! # Basket
//!
//! A single basket: its line items, the promotions attached at creation, and
//! the lock guarding the items.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation          Lock on `items`       Concurrent with               │
//! │  ─────────          ───────────────       ───────────────               │
//! │  add_item()         write (exclusive)     nothing on this basket        │
//! │  items()            read (shared)         other reads                   │
//! │  totals()           read (shared)         other reads                   │
//! │  snapshot()         read (shared)         other reads                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A basket never touches the registry lock. Callers reach it only through
//! [`BasketStore::with_basket`](crate::BasketStore), which already holds the
//! registry read guard.

use std::collections::HashMap;
use std::sync::Arc;

use lana_core::validation::validate_add_quantity;
use lana_core::{price_items, Catalog, CoreResult, LineItem, ProductItem, Promotion, Totals};
use parking_lot::RwLock;

pub(crate) struct Basket {
    id: String,
    items: RwLock<HashMap<String, LineItem>>,
    promotions: Arc<[Promotion]>,
}

impl Basket {
    /// Creates an empty basket priced under `promotions`.
    pub(crate) fn new(id: String, promotions: Arc<[Promotion]>) -> Self {
        Basket {
            id,
            items: RwLock::new(HashMap::new()),
            promotions,
        }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    /// Adds `amount` units of `code` and returns the new line quantity.
    ///
    /// ## Behavior
    /// - Product already in basket: quantity increases by `amount`
    /// - Product not in basket: added with quantity `amount`
    ///
    /// Validation and the catalog lookup happen before the write lock is
    /// taken; an error leaves the basket exactly as it was.
    pub(crate) fn add_item(&self, catalog: &Catalog, code: &str, amount: i64) -> CoreResult<i64> {
        validate_add_quantity(amount)?;
        let product = catalog.require(code)?;

        let mut items = self.items.write();
        match items.get_mut(code) {
            Some(item) => {
                item.quantity = item.accumulated(amount)?;
                Ok(item.quantity)
            }
            None => {
                items.insert(code.to_string(), LineItem::new(product.clone(), amount));
                Ok(amount)
            }
        }
    }

    /// Point-in-time snapshot of the line items. Order is unspecified.
    pub(crate) fn items(&self) -> Vec<ProductItem> {
        self.items
            .read()
            .values()
            .map(LineItem::to_product_item)
            .collect()
    }

    /// Prices the current items under this basket's promotions.
    pub(crate) fn totals(&self) -> CoreResult<Totals> {
        let items = self.items.read();
        price_items(&items, &self.promotions)
    }

    /// Items and their pricing, taken under one read guard.
    pub(crate) fn snapshot(&self) -> CoreResult<(Vec<ProductItem>, Totals)> {
        let items = self.items.read();
        let totals = price_items(&items, &self.promotions)?;
        let listed = items.values().map(LineItem::to_product_item).collect();
        Ok((listed, totals))
    }
}

impl std::fmt::Debug for Basket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Basket")
            .field("id", &self.id)
            .field("items", &self.items.read().len())
            .field("promotions", &self.promotions.len())
            .finish()
    }
}
