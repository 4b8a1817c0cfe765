// core/src/manager.rs

//! The cart manager: the single authoritative owner of cart state.
//!
//! Every operation takes the acting user's id explicitly and returns the full
//! updated cart (state plus totals), so callers always render what the server
//! committed. Mutations run inside the user's critical section from
//! [`UserLocks`]; reads do not take the lock and see the most recently
//! committed state.

use std::sync::Arc;

use tracing::{event, instrument, Level};
use uuid::Uuid;

use crate::cart::{CartItem, CartView};
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::locks::UserLocks;
use crate::storage::Storage;

pub struct CartManager {
  storage: Arc<dyn Storage>,
  catalog: Arc<dyn Catalog>,
  locks: Arc<UserLocks>,
  delivery_fee_cents: i64,
}

impl CartManager {
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

  /// The user's current cart with totals. First access yields an empty cart.
  pub async fn cart(&self, user_id: Uuid) -> Result<CartView> {
    let cart = self.storage.get_cart(user_id).await?;
    Ok(cart.view(self.delivery_fee_cents))
  }

  /// Adds `quantity` of a menu item to the cart.
  ///
  /// The item is resolved through the catalog exactly once, here, and its
  /// name/price/image are snapshotted into the cart line; later catalog edits
  /// do not reprice lines already in a cart. Adding a dish that is already in
  /// the cart sums the quantities. Items from a second restaurant are
  /// rejected outright; the caller must clear the cart to switch.
  #[instrument(
        name = "CartManager::add_item",
        skip_all,
        fields(user_id = %user_id, menu_item_id = %menu_item_id, quantity = quantity),
        err(Display)
    )]
  pub async fn add_item(&self, user_id: Uuid, menu_item_id: &str, quantity: i32) -> Result<CartView> {
    if quantity < 1 {
      return Err(Error::InvalidQuantity { given: quantity });
    }

    let item = self
      .catalog
      .menu_item(menu_item_id)
      .await?
      .ok_or_else(|| Error::NotFound {
        entity: "Menu item",
        id: menu_item_id.to_owned(),
      })?;

    let _guard = self.locks.acquire(user_id).await;

    let mut cart = self.storage.get_cart(user_id).await?;
    match &cart.restaurant_id {
      Some(in_cart) if *in_cart != item.restaurant_id => {
        event!(
          Level::WARN,
          in_cart = %in_cart,
          requested = %item.restaurant_id,
          "Rejecting add from a different restaurant."
        );
        return Err(Error::CrossRestaurant {
          in_cart: in_cart.clone(),
          requested: item.restaurant_id,
        });
      }
      Some(_) => {}
      None => cart.restaurant_id = Some(item.restaurant_id.clone()),
    }

    cart.merge_item(CartItem {
      menu_item_id: item.id,
      name: item.name,
      price_cents: item.price_cents,
      quantity,
      image: item.image,
    });

    self.storage.upsert_cart(&cart).await?;
    event!(Level::DEBUG, "Item added to cart.");
    Ok(cart.view(self.delivery_fee_cents))
  }

  /// Sets the quantity of an item already in the cart.
  ///
  /// A target below 1 degenerates to removal and so never fails for an
  /// absent item; a target of 1 or more requires the item to be present.
  pub async fn update_quantity(&self, user_id: Uuid, menu_item_id: &str, quantity: i32) -> Result<CartView> {
    if quantity < 1 {
      return self.remove_item(user_id, menu_item_id).await;
    }

    let _guard = self.locks.acquire(user_id).await;

    let mut cart = self.storage.get_cart(user_id).await?;
    if !cart.set_quantity(menu_item_id, quantity) {
      return Err(Error::ItemNotFound {
        menu_item_id: menu_item_id.to_owned(),
      });
    }

    self.storage.upsert_cart(&cart).await?;
    event!(Level::DEBUG, user_id = %user_id, menu_item_id = %menu_item_id, quantity = quantity, "Cart quantity updated.");
    Ok(cart.view(self.delivery_fee_cents))
  }

  /// Removes an item. Removing something that is not there is a no-op, so
  /// retried deletes converge instead of erroring.
  pub async fn remove_item(&self, user_id: Uuid, menu_item_id: &str) -> Result<CartView> {
    let _guard = self.locks.acquire(user_id).await;

    let mut cart = self.storage.get_cart(user_id).await?;
    cart.remove_item(menu_item_id);

    self.storage.upsert_cart(&cart).await?;
    event!(Level::DEBUG, user_id = %user_id, menu_item_id = %menu_item_id, "Cart item removed.");
    Ok(cart.view(self.delivery_fee_cents))
  }

  /// Empties the cart and releases its restaurant binding.
  pub async fn clear(&self, user_id: Uuid) -> Result<CartView> {
    let _guard = self.locks.acquire(user_id).await;

    let mut cart = self.storage.get_cart(user_id).await?;
    cart.clear();

    self.storage.upsert_cart(&cart).await?;
    event!(Level::DEBUG, user_id = %user_id, "Cart cleared.");
    Ok(cart.view(self.delivery_fee_cents))
  }

  pub fn delivery_fee_cents(&self) -> i64 {
    self.delivery_fee_cents
  }
}
