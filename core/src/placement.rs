// core/src/placement.rs

//! Order placement: the one-way conversion of a cart into an order.
//!
//! Placement validates inside the user's critical section, then hands the
//! storage a single atomic unit of work (persist order, empty cart). A
//! concurrent placement for the same user therefore serializes behind the
//! winner and finds the cart already empty.

use std::sync::Arc;

use chrono::Utc;
use tracing::{event, instrument, Level};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::locks::UserLocks;
use crate::order::{Order, OrderLine, OrderStatus};
use crate::storage::Storage;

pub struct OrderPlacer {
  storage: Arc<dyn Storage>,
  catalog: Arc<dyn Catalog>,
  locks: Arc<UserLocks>,
  delivery_fee_cents: i64,
}

impl OrderPlacer {
  pub fn new(
    storage: Arc<dyn Storage>,
    catalog: Arc<dyn Catalog>,
    locks: Arc<UserLocks>,
    delivery_fee_cents: i64,
  ) -> Self {
    Self {
      storage,
      catalog,
      locks,
      delivery_fee_cents,
    }
  }

  /// Places an order from the user's current cart.
  ///
  /// Preconditions (checked with no side effects): the delivery address must
  /// be non-blank and the cart non-empty. On success the order snapshot and
  /// the cart reset commit together; the returned order is the persisted
  /// record, grand total (subtotal plus delivery fee) included.
  #[instrument(
        name = "OrderPlacer::place",
        skip_all,
        fields(user_id = %user_id),
        err(Display)
    )]
  pub async fn place(&self, user_id: Uuid, delivery_address: &str) -> Result<Order> {
    let delivery_address = delivery_address.trim();
    if delivery_address.is_empty() {
      return Err(Error::MissingAddress);
    }

    let _guard = self.locks.acquire(user_id).await;

    let cart = self.storage.get_cart(user_id).await?;
    if cart.is_empty() {
      return Err(Error::EmptyCart);
    }
    let restaurant_id = cart
      .restaurant_id
      .clone()
      .ok_or_else(|| Error::Internal("non-empty cart without restaurant binding".to_owned()))?;

    // Restaurant names are display snapshots; a since-delisted restaurant
    // must not block checkout of a cart that was legally filled.
    let restaurant_name = self
      .catalog
      .restaurant(&restaurant_id)
      .await?
      .map(|r| r.name)
      .unwrap_or_else(|| "Unknown".to_owned());

    let totals = cart.totals(self.delivery_fee_cents);
    let order = Order {
      id: Uuid::new_v4(),
      user_id,
      restaurant_id,
      restaurant_name,
      items: cart
        .items
        .iter()
        .map(|i| OrderLine {
          menu_item_id: i.menu_item_id.clone(),
          name: i.name.clone(),
          price_cents: i.price_cents,
          quantity: i.quantity,
        })
        .collect(),
      delivery_address: delivery_address.to_owned(),
      total_amount_cents: totals.total_cents,
      status: OrderStatus::Placed,
      created_at: Utc::now(),
    };

    self.storage.create_order(&order).await?;
    event!(
      Level::INFO,
      order_id = %order.id,
      total_amount_cents = order.total_amount_cents,
      "Order placed."
    );
    Ok(order)
  }

  /// The user's order history, newest first.
  pub async fn orders(&self, user_id: Uuid) -> Result<Vec<Order>> {
    self.storage.list_orders(user_id).await
  }

  /// A single order, visible only to its owner.
  pub async fn order(&self, user_id: Uuid, order_id: Uuid) -> Result<Order> {
    self
      .storage
      .get_order(user_id, order_id)
      .await?
      .ok_or_else(|| Error::NotFound {
        entity: "Order",
        id: order_id.to_string(),
      })
  }
}
