//! # lana-store: Concurrent Basket Store
//!
//! Owns every basket in the process and serializes access to them.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Arc<BasketStore>                                                       │
//! │    ├── Arc<Catalog>           shared, read-only                         │
//! │    ├── Arc<[Promotion]>       attached to every new basket              │
//! │    └── RwLock<HashMap<id, Basket>>                                      │
//! │                                   └── RwLock<HashMap<code, LineItem>>   │
//! │                                                                         │
//! │  BasketHandle { id, Arc<BasketStore> }  ◄── what callers hold           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use lana_core::{Catalog, ProductItem, PEN, TSHIRT};
//! use lana_store::{BasketStore, StoreError};
//!
//! let store = BasketStore::new(Arc::new(Catalog::lana()));
//! let basket = store.create();
//!
//! basket.add_item(&ProductItem::new(TSHIRT, 3)).unwrap();
//! assert_eq!(basket.total().unwrap().cents(), 4500);
//!
//! store.delete(basket.id()).unwrap();
//! assert!(matches!(basket.items(), Err(StoreError::NotFound(_))));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

mod basket;
pub mod error;
mod handle;
mod registry;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ErrorClass, StoreError, StoreResult};
pub use handle::{BasketHandle, BasketSnapshot};
pub use registry::BasketStore;
