//! # lana-core: Pure Pricing Logic for Lana Checkout
//!
//! This crate is the **heart** of Lana Checkout. It contains the catalog,
//! the money type and the promotion engine as pure functions with zero I/O
//! dependencies and no shared mutable state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lana Checkout Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    lana-api (HTTP, axum)                        │   │
//! │  │    POST /basket ──► POST /basket/{id} ──► GET /basket/{id}      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                lana-store (Registry + Baskets)                  │   │
//! │  │        RwLock<HashMap<id, Basket>> ──► per-basket RwLock        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lana-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │ promotion │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ pricing   │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Read-only product table (code → name, unit price)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`promotion`] - Discount rules evaluated against basket line items
//! - [`pricing`] - Subtotal, discounts and payable total of a basket
//! - [`types`] - Line items and wire DTOs
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use lana_core::{Catalog, LineItem, Promotion, PEN};
//!
//! let catalog = Catalog::lana();
//! let pen = catalog.lookup(PEN).unwrap().clone();
//!
//! let mut items = HashMap::new();
//! items.insert(PEN.to_string(), LineItem::new(pen, 2));
//!
//! // Buy 2 pens, get 1 free
//! let discounts = Promotion::default_set()[0].evaluate(&items).unwrap();
//! assert_eq!(discounts[0].amount.cents(), 500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod promotion;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, Product, MUG, PEN, TSHIRT};
pub use error::{CoreError, CoreResult, PromotionError, ValidationError};
pub use money::Money;
pub use pricing::{price_items, Totals};
pub use promotion::{evaluate_all, Discount, Promotion};
pub use types::{LineItem, ProductItem};
