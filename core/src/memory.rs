// core/src/memory.rs

//! In-memory collaborator implementations. These are the reference semantics
//! for the `Storage` and `Catalog` traits and the backing for the crate's
//! integration tests; the HTTP server binds Postgres implementations instead.
//!
//! Locks here are parking_lot and blocking: guards are taken and dropped
//! inside each method body and MUST NOT be held across `.await` points.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::cart::Cart;
use crate::catalog::{Catalog, MenuItem, Restaurant};
use crate::error::Result;
use crate::order::Order;
use crate::storage::Storage;

#[derive(Default)]
struct MemoryState {
  carts: HashMap<Uuid, Cart>,
  orders: HashMap<Uuid, Order>,
  // Set to simulate an outage: every operation fails with this message until
  // cleared again.
  outage: Option<String>,
}

/// Process-local `Storage`. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct MemoryStorage {
  state: Arc<RwLock<MemoryState>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Makes every subsequent operation fail, for exercising unavailability
  /// handling.
  pub fn set_outage(&self, message: &str) {
    self.state.write().outage = Some(message.to_owned());
  }

  pub fn clear_outage(&self) {
    self.state.write().outage = None;
  }

  fn check_outage(state: &MemoryState) -> Result<()> {
    match &state.outage {
      Some(message) => Err(anyhow!("{message}").into()),
      None => Ok(()),
    }
  }
}

#[async_trait]
impl Storage for MemoryStorage {
  async fn get_cart(&self, user_id: Uuid) -> Result<Cart> {
    let state = self.state.read();
    Self::check_outage(&state)?;
    Ok(
      state
        .carts
        .get(&user_id)
        .cloned()
        .unwrap_or_else(|| Cart::empty(user_id)),
    )
  }

  async fn upsert_cart(&self, cart: &Cart) -> Result<()> {
    let mut state = self.state.write();
    Self::check_outage(&state)?;
    state.carts.insert(cart.user_id, cart.clone());
    Ok(())
  }

  async fn create_order(&self, order: &Order) -> Result<()> {
    // Single write-guard scope keeps order insert and cart reset atomic.
    let mut state = self.state.write();
    Self::check_outage(&state)?;
    state.orders.insert(order.id, order.clone());
    state.carts.insert(order.user_id, Cart::empty(order.user_id));
    Ok(())
  }

  async fn get_order(&self, user_id: Uuid, order_id: Uuid) -> Result<Option<Order>> {
    let state = self.state.read();
    Self::check_outage(&state)?;
    Ok(
      state
        .orders
        .get(&order_id)
        .filter(|o| o.user_id == user_id)
        .cloned(),
    )
  }

  async fn list_orders(&self, user_id: Uuid) -> Result<Vec<Order>> {
    let state = self.state.read();
    Self::check_outage(&state)?;
    let mut orders: Vec<Order> = state
      .orders
      .values()
      .filter(|o| o.user_id == user_id)
      .cloned()
      .collect();
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(orders)
  }
}

#[derive(Default)]
struct CatalogState {
  menu_items: HashMap<String, MenuItem>,
  restaurants: HashMap<String, Restaurant>,
}

/// Process-local `Catalog`. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct MemoryCatalog {
  state: Arc<RwLock<CatalogState>>,
}

impl MemoryCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn upsert_restaurant(&self, restaurant: Restaurant) {
    self
      .state
      .write()
      .restaurants
      .insert(restaurant.id.clone(), restaurant);
  }

  pub fn upsert_menu_item(&self, item: MenuItem) {
    self.state.write().menu_items.insert(item.id.clone(), item);
  }

  /// Changes a known item's price in place. Carts that already snapshotted
  /// the old price are unaffected.
  pub fn set_price(&self, menu_item_id: &str, price_cents: i64) {
    if let Some(item) = self.state.write().menu_items.get_mut(menu_item_id) {
      item.price_cents = price_cents;
    }
  }
}

#[async_trait]
impl Catalog for MemoryCatalog {
  async fn menu_item(&self, id: &str) -> Result<Option<MenuItem>> {
    Ok(self.state.read().menu_items.get(id).cloned())
  }

  async fn restaurant(&self, id: &str) -> Result<Option<Restaurant>> {
    Ok(self.state.read().restaurants.get(id).cloned())
  }
}
