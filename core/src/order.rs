// core/src/order.rs

//! Orders are frozen derivations of a cart at the moment of placement. Once
//! created, their lines and total never change; only the fulfillment status
//! moves, and only forward (placed -> preparing -> delivered).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fulfillment state. The writer side is an external process; this crate only
/// reads statuses, so parsing is open-world: a string this version does not
/// know lands in `Other` and is rendered as-is instead of failing the read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum OrderStatus {
  Placed,
  Preparing,
  Delivered,
  Other(String),
}

impl OrderStatus {
  pub fn as_str(&self) -> &str {
    match self {
      OrderStatus::Placed => "placed",
      OrderStatus::Preparing => "preparing",
      OrderStatus::Delivered => "delivered",
      OrderStatus::Other(s) => s,
    }
  }
}

impl From<String> for OrderStatus {
  fn from(s: String) -> Self {
    match s.as_str() {
      "placed" => OrderStatus::Placed,
      "preparing" => OrderStatus::Preparing,
      "delivered" => OrderStatus::Delivered,
      _ => OrderStatus::Other(s),
    }
  }
}

impl From<OrderStatus> for String {
  fn from(status: OrderStatus) -> Self {
    status.as_str().to_owned()
  }
}

/// One immutable line of an order: the cart line it was copied from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
  pub menu_item_id: String,
  pub name: String,
  pub price_cents: i64,
  pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
  pub id: Uuid,
  pub user_id: Uuid,
  pub restaurant_id: String,
  /// Snapshot of the restaurant's name at placement time ("Unknown" when the
  /// catalog no longer knows the restaurant).
  pub restaurant_name: String,
  pub items: Vec<OrderLine>,
  pub delivery_address: String,
  /// Grand total charged: subtotal plus delivery fee, in integer cents.
  pub total_amount_cents: i64,
  pub status: OrderStatus,
  pub created_at: DateTime<Utc>,
}
