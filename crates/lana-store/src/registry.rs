//! # Basket Registry
//!
//! The concurrent map from basket id to basket.
//!
//! ## Lock Ordering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Two Lock Domains, One Order                          │
//! │                                                                         │
//! │  (1) registry: RwLock<HashMap<id, Basket>>                              │
//! │        read  ── get, list, every BasketHandle operation                 │
//! │        write ── create, delete                                          │
//! │                                                                         │
//! │  (2) basket:   RwLock<HashMap<code, LineItem>>                          │
//! │        read  ── items, totals                                           │
//! │        write ── add_item                                                │
//! │                                                                         │
//! │  ALWAYS (1) then (2). Never take (1) while holding (2).                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Delete vs. In-Flight Operations
//! A handle operation keeps the registry read guard for its whole duration
//! (lookup *and* basket work). `delete` needs the write guard, so it waits
//! for every in-flight operation to finish, and no operation can reach a
//! basket once `delete` has returned. The existence check and the removal
//! happen under that single write guard, so two racing deletes of the same
//! id resolve to exactly one success and one `NotFound`.

use std::collections::HashMap;
use std::sync::Arc;

use lana_core::{Catalog, Promotion};
use parking_lot::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::basket::Basket;
use crate::error::{StoreError, StoreResult};
use crate::handle::BasketHandle;

/// In-memory basket registry.
///
/// Constructed explicitly and shared through an `Arc`; independent stores do
/// not see each other's baskets.
///
/// ```rust
/// use std::sync::Arc;
/// use lana_core::{Catalog, ProductItem, PEN};
/// use lana_store::BasketStore;
///
/// let store = BasketStore::new(Arc::new(Catalog::lana()));
/// let basket = store.create();
/// basket.add_item(&ProductItem::new(PEN, 2)).unwrap();
/// assert_eq!(basket.total().unwrap().cents(), 500);
/// ```
#[derive(Debug)]
pub struct BasketStore {
    catalog: Arc<Catalog>,
    promotions: Arc<[Promotion]>,
    baskets: RwLock<HashMap<String, Basket>>,
}

impl BasketStore {
    /// Creates a store whose baskets carry [`Promotion::default_set`].
    pub fn new(catalog: Arc<Catalog>) -> Arc<Self> {
        BasketStore::with_promotions(catalog, Promotion::default_set())
    }

    /// Creates a store whose baskets carry `promotions`, in that order.
    pub fn with_promotions(catalog: Arc<Catalog>, promotions: Vec<Promotion>) -> Arc<Self> {
        Arc::new(BasketStore {
            catalog,
            promotions: promotions.into(),
            baskets: RwLock::new(HashMap::new()),
        })
    }

    /// The catalog shared by every basket in this store.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Creates an empty basket and returns a handle to it.
    pub fn create(self: &Arc<Self>) -> BasketHandle {
        let mut baskets = self.baskets.write();
        let id = loop {
            let id = Uuid::new_v4().to_string();
            if !baskets.contains_key(&id) {
                break id;
            }
        };
        baskets.insert(id.clone(), Basket::new(id.clone(), Arc::clone(&self.promotions)));
        drop(baskets);

        info!(basket_id = %id, "Basket created");
        BasketHandle::new(id, Arc::clone(self))
    }

    /// Looks up a basket by id.
    pub fn get(self: &Arc<Self>, id: &str) -> StoreResult<BasketHandle> {
        if self.baskets.read().contains_key(id) {
            Ok(BasketHandle::new(id.to_string(), Arc::clone(self)))
        } else {
            debug!(basket_id = %id, "Basket lookup missed");
            Err(StoreError::NotFound(id.to_string()))
        }
    }

    /// Handles to every basket currently registered. Order is unspecified.
    pub fn list(self: &Arc<Self>) -> Vec<BasketHandle> {
        self.baskets
            .read()
            .values()
            .map(|basket| BasketHandle::new(basket.id().to_string(), Arc::clone(self)))
            .collect()
    }

    /// Removes a basket.
    ///
    /// Blocks until operations already running on any basket complete.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut baskets = self.baskets.write();
        match baskets.remove(id) {
            Some(_) => {
                drop(baskets);
                info!(basket_id = %id, "Basket deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Number of registered baskets.
    pub fn len(&self) -> usize {
        self.baskets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.baskets.read().is_empty()
    }

    /// Runs `f` against basket `id` while holding the registry read guard.
    ///
    /// `f` must not call back into the store.
    pub(crate) fn with_basket<R>(
        &self,
        id: &str,
        f: impl FnOnce(&Basket) -> StoreResult<R>,
    ) -> StoreResult<R> {
        let baskets = self.baskets.read();
        let basket = baskets
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        f(basket)
    }
}
