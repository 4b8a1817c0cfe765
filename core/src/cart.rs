// core/src/cart.rs

//! The per-user cart: a mutable selection of menu items bound to exactly one
//! restaurant, plus the totals derived from it.
//!
//! Invariants upheld here:
//!  - Every item carries the restaurant binding via the cart's
//!    `restaurant_id`; all items belong to that one restaurant.
//!  - `restaurant_id` is `None` exactly when `items` is empty.
//!  - Item quantities are always >= 1 (a quantity below 1 is a removal,
//!    decided by the caller).
//!  - Prices are snapshots taken at add time; totals never consult the
//!    catalog.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money;

/// One line in a cart. `price_cents`, `name` and `image` are snapshots of the
/// menu item at the moment it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
  pub menu_item_id: String,
  pub name: String,
  pub price_cents: i64,
  pub quantity: i32,
  pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
  pub user_id: Uuid,
  pub restaurant_id: Option<String>,
  pub items: Vec<CartItem>,
}

/// Derived amounts, recomputed from the items on every call. Nothing here is
/// stored or incrementally updated, so the subtotal can never drift from the
/// item lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
  pub subtotal_cents: i64,
  pub delivery_fee_cents: i64,
  pub total_cents: i64,
}

/// What cart operations hand back to callers: the full cart state plus its
/// totals, so clients render server truth instead of recomputing locally.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
  #[serde(flatten)]
  pub cart: Cart,
  pub totals: CartTotals,
}

impl Cart {
  pub fn empty(user_id: Uuid) -> Self {
    Cart {
      user_id,
      restaurant_id: None,
      items: Vec::new(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn item(&self, menu_item_id: &str) -> Option<&CartItem> {
    self.items.iter().find(|i| i.menu_item_id == menu_item_id)
  }

  /// Inserts a new line or folds the quantity into an existing one
  /// (same dish twice combines, it does not overwrite).
  /// The caller has already validated quantity and restaurant binding.
  pub(crate) fn merge_item(&mut self, item: CartItem) {
    match self.items.iter_mut().find(|i| i.menu_item_id == item.menu_item_id) {
      Some(existing) => existing.quantity += item.quantity,
      None => self.items.push(item),
    }
  }

  /// Replaces the quantity of an existing line. Returns false if the line is
  /// absent.
  pub(crate) fn set_quantity(&mut self, menu_item_id: &str, quantity: i32) -> bool {
    match self.items.iter_mut().find(|i| i.menu_item_id == menu_item_id) {
      Some(item) => {
        item.quantity = quantity;
        true
      }
      None => false,
    }
  }

  /// Removes a line if present. Emptying the cart releases the restaurant
  /// binding so the next add may come from anywhere.
  pub(crate) fn remove_item(&mut self, menu_item_id: &str) {
    self.items.retain(|i| i.menu_item_id != menu_item_id);
    if self.items.is_empty() {
      self.restaurant_id = None;
    }
  }

  pub(crate) fn clear(&mut self) {
    self.items.clear();
    self.restaurant_id = None;
  }

  /// Subtotal, delivery fee and grand total in integer cents. The fee applies
  /// only to non-empty carts.
  pub fn totals(&self, delivery_fee_cents: i64) -> CartTotals {
    let subtotal_cents: i64 = self
      .items
      .iter()
      .map(|i| money::line_total(i.price_cents, i.quantity))
      .sum();

    let delivery_fee_cents = if subtotal_cents > 0 { delivery_fee_cents } else { 0 };

    CartTotals {
      subtotal_cents,
      delivery_fee_cents,
      total_cents: subtotal_cents + delivery_fee_cents,
    }
  }

  pub fn view(self, delivery_fee_cents: i64) -> CartView {
    let totals = self.totals(delivery_fee_cents);
    CartView { cart: self, totals }
  }
}
