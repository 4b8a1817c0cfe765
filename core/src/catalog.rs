// core/src/catalog.rs

//! Read-only catalog collaborator: where menu items and restaurants come from.
//! The cart engine resolves an item here exactly once, at add time, and
//! snapshots what it needs; it never re-reads the catalog for items already
//! in a cart.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A dish as the catalog knows it. `price_cents` is the authoritative price
/// at lookup time; carts copy it rather than referencing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
  pub id: String,
  pub restaurant_id: String,
  pub name: String,
  pub description: String,
  pub price_cents: i64,
  pub image: String,
  pub category: String,
  pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
  pub id: String,
  pub name: String,
  pub description: String,
  pub image: String,
  pub cuisine_type: String,
  pub rating: f64,
  pub delivery_time: String,
  pub min_order_cents: i64,
}

/// Lookup seam between the ordering core and whatever owns the menu data.
/// Implementations return `Ok(None)` for unknown ids and reserve `Err` for
/// infrastructure failure.
#[async_trait]
pub trait Catalog: Send + Sync {
  async fn menu_item(&self, id: &str) -> Result<Option<MenuItem>>;

  async fn restaurant(&self, id: &str) -> Result<Option<Restaurant>>;
}
