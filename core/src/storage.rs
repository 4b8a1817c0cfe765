// core/src/storage.rs

//! Persistence seam for carts and orders.
//!
//! Implementations own durability only; every ordering rule (quantity
//! validation, restaurant binding, snapshotting, fee math) lives above this
//! trait. Infrastructure failure surfaces as `Err` and is mapped to
//! `Error::Unavailable` at the call site; it is never reported as a
//! successful empty result.

use async_trait::async_trait;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::Result;
use crate::order::Order;

#[async_trait]
pub trait Storage: Send + Sync {
  /// The user's current cart. First access yields an empty cart, not an
  /// error.
  async fn get_cart(&self, user_id: Uuid) -> Result<Cart>;

  /// Persists the cart as given, replacing whatever was stored. Callers hold
  /// the user's mutation lock, so replacement cannot lose a concurrent
  /// update.
  async fn upsert_cart(&self, cart: &Cart) -> Result<()>;

  /// Persists the order and empties the owner's cart as one atomic unit.
  /// Either both take effect or neither does.
  async fn create_order(&self, order: &Order) -> Result<()>;

  async fn get_order(&self, user_id: Uuid, order_id: Uuid) -> Result<Option<Order>>;

  /// The user's orders, newest first.
  async fn list_orders(&self, user_id: Uuid) -> Result<Vec<Order>>;
}
