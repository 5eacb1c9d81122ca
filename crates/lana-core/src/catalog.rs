//! # Catalog
//!
//! Read-only product table. Loaded once at startup and shared by every
//! basket; never mutated afterwards.
//!
//! ## Lana Merchandise
//! ```text
//! ┌──────────┬───────────────────┬─────────┐
//! │ Code     │ Name              │ Price   │
//! ├──────────┼───────────────────┼─────────┤
//! │ PEN      │ Lana Pen          │  €5.00  │
//! │ TSHIRT   │ Lana T-Shirt      │ €20.00  │
//! │ MUG      │ Lana Coffee Mug   │  €7.50  │
//! └──────────┴───────────────────┴─────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Code of the Lana Pen.
pub const PEN: &str = "PEN";

/// Code of the Lana T-Shirt.
pub const TSHIRT: &str = "TSHIRT";

/// Code of the Lana Coffee Mug.
pub const MUG: &str = "MUG";

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier, e.g. `PEN`.
    pub code: String,

    /// Display name used in discount descriptions.
    pub name: String,

    /// Price of a single unit.
    pub price: Money,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Product code → descriptor lookup table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    /// Builds a catalog from an arbitrary product list.
    ///
    /// A later product with the same code replaces an earlier one.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Catalog {
            products: products
                .into_iter()
                .map(|product| (product.code.clone(), product))
                .collect(),
        }
    }

    /// The standard Lana merchandise table.
    pub fn lana() -> Self {
        Catalog::from_products([
            Product::new(PEN, "Lana Pen", Money::from_cents(500)),
            Product::new(TSHIRT, "Lana T-Shirt", Money::from_cents(2000)),
            Product::new(MUG, "Lana Coffee Mug", Money::from_cents(750)),
        ])
    }

    /// Returns the descriptor for `code`, if the catalog carries it.
    pub fn lookup(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    /// Like [`Catalog::lookup`], but a missing code is an error.
    pub fn require(&self, code: &str) -> CoreResult<&Product> {
        self.lookup(code)
            .ok_or_else(|| CoreError::ProductNotFound(code.to_string()))
    }

    /// Membership test.
    pub fn is_valid(&self, code: &str) -> bool {
        self.products.contains_key(code)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lana_catalog_is_initialized() {
        let catalog = Catalog::lana();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.lookup(PEN).unwrap().name, "Lana Pen");
        assert_eq!(catalog.lookup(TSHIRT).unwrap().name, "Lana T-Shirt");
        assert_eq!(catalog.lookup(MUG).unwrap().name, "Lana Coffee Mug");
    }

    #[test]
    fn test_lookup_prices() {
        let catalog = Catalog::lana();
        assert_eq!(catalog.lookup(PEN).unwrap().price.cents(), 500);
        assert_eq!(catalog.lookup(TSHIRT).unwrap().price.cents(), 2000);
        assert_eq!(catalog.lookup(MUG).unwrap().price.cents(), 750);
        assert!(catalog.lookup("Rocket Fuel").is_none());
    }

    #[test]
    fn test_is_valid() {
        let catalog = Catalog::lana();
        assert!(catalog.is_valid(PEN));
        assert!(!catalog.is_valid("Rocket Fuel"));
        // Codes are case sensitive
        assert!(!catalog.is_valid("pen"));
    }

    #[test]
    fn test_require_missing_product() {
        let catalog = Catalog::lana();
        let err = catalog.require("Rocket Fuel").unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(code) if code == "Rocket Fuel"));
    }

    #[test]
    fn test_from_products_last_wins() {
        let catalog = Catalog::from_products([
            Product::new("HAT", "Old Hat", Money::from_cents(100)),
            Product::new("HAT", "New Hat", Money::from_cents(200)),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("HAT").unwrap().name, "New Hat");
    }
}
