// src/lib.rs

//! QuickBite core: the cart and order placement engine for a food-ordering
//! storefront.
//!
//! The crate owns the ordering rules end to end:
//!  - Per-user carts bound to a single restaurant, with add/update/remove
//!    operations that validate before they mutate.
//!  - Price snapshots taken at add time, so catalog edits never reprice a
//!    cart behind the user's back.
//!  - Totals recomputed from the lines on every read (subtotal, flat
//!    delivery fee on non-empty carts, grand total), all in integer cents.
//!  - Atomic cart-to-order conversion: the order snapshot and the cart reset
//!    commit as one unit inside the user's critical section.
//!  - Per-user serialization of mutations, so concurrent requests apply in
//!    arrival order without lost updates.
//!
//! Persistence and catalog lookups sit behind the [`Storage`] and [`Catalog`]
//! traits; [`MemoryStorage`]/[`MemoryCatalog`] provide the reference
//! implementations used by tests. Identity is an explicit [`uuid::Uuid`] on
//! every operation; there is no ambient session state in this crate.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod locks;
pub mod manager;
pub mod memory;
pub mod money;
pub mod order;
pub mod placement;
pub mod storage;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartItem, CartTotals, CartView};
pub use crate::catalog::{Catalog, MenuItem, Restaurant};
pub use crate::error::{Error, Result};
pub use crate::locks::UserLocks;
pub use crate::manager::CartManager;
pub use crate::memory::{MemoryCatalog, MemoryStorage};
pub use crate::money::DEFAULT_DELIVERY_FEE_CENTS;
pub use crate::order::{Order, OrderLine, OrderStatus};
pub use crate::placement::OrderPlacer;
pub use crate::storage::Storage;
