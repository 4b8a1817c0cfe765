// server/src/storage/pg_storage.rs

use std::collections::HashMap;

use async_trait::async_trait;
use quickbite_core::{Cart, Error as CoreError, Order, Result as CoreResult, Storage};
use sqlx::PgPool;
use uuid::Uuid;

use super::rows::{assemble_cart, assemble_order, CartItemRow, CartRow, OrderLineRow, OrderRow};

/// `Storage` over Postgres. Carts are stored as a head row plus one row per
/// line; orders as a head row plus immutable line rows. All multi-row writes
/// run in a transaction.
#[derive(Clone)]
pub struct PgStorage {
  pool: PgPool,
}

impl PgStorage {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

// The core treats any storage failure as retry-eligible unavailability.
fn storage_err(err: sqlx::Error) -> CoreError {
  CoreError::Unavailable {
    source: anyhow::Error::new(err),
  }
}

#[async_trait]
impl Storage for PgStorage {
  async fn get_cart(&self, user_id: Uuid) -> CoreResult<Cart> {
    let head = sqlx::query_as::<_, CartRow>("SELECT user_id, restaurant_id FROM carts WHERE user_id = $1")
      .bind(user_id)
      .fetch_optional(&self.pool)
      .await
      .map_err(storage_err)?;

    let items = sqlx::query_as::<_, CartItemRow>(
      "SELECT menu_item_id, name, price_cents, quantity, image FROM cart_items WHERE user_id = $1 ORDER BY position",
    )
    .bind(user_id)
    .fetch_all(&self.pool)
    .await
    .map_err(storage_err)?;

    Ok(assemble_cart(head, items, user_id))
  }

  async fn upsert_cart(&self, cart: &Cart) -> CoreResult<()> {
    let mut tx = self.pool.begin().await.map_err(storage_err)?;

    sqlx::query(
      "INSERT INTO carts (user_id, restaurant_id) VALUES ($1, $2) \
       ON CONFLICT (user_id) DO UPDATE SET restaurant_id = EXCLUDED.restaurant_id",
    )
    .bind(cart.user_id)
    .bind(cart.restaurant_id.as_deref())
    .execute(&mut *tx)
    .await
    .map_err(storage_err)?;

    // Full replacement: the caller holds the user's mutation lock, so the
    // cart given here is the complete intended state.
    sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
      .bind(cart.user_id)
      .execute(&mut *tx)
      .await
      .map_err(storage_err)?;

    for (position, item) in cart.items.iter().enumerate() {
      sqlx::query(
        "INSERT INTO cart_items (user_id, menu_item_id, name, price_cents, quantity, image, position) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
      )
      .bind(cart.user_id)
      .bind(&item.menu_item_id)
      .bind(&item.name)
      .bind(item.price_cents)
      .bind(item.quantity)
      .bind(&item.image)
      .bind(position as i32)
      .execute(&mut *tx)
      .await
      .map_err(storage_err)?;
    }

    tx.commit().await.map_err(storage_err)
  }

  async fn create_order(&self, order: &Order) -> CoreResult<()> {
    // Order rows and the cart reset commit together; a crash between the
    // two can never charge for a cart that is still full.
    let mut tx = self.pool.begin().await.map_err(storage_err)?;

    sqlx::query(
      "INSERT INTO orders (id, user_id, restaurant_id, restaurant_name, delivery_address, \
       total_amount_cents, status, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(order.id)
    .bind(order.user_id)
    .bind(&order.restaurant_id)
    .bind(&order.restaurant_name)
    .bind(&order.delivery_address)
    .bind(order.total_amount_cents)
    .bind(order.status.as_str())
    .bind(order.created_at)
    .execute(&mut *tx)
    .await
    .map_err(storage_err)?;

    for (position, line) in order.items.iter().enumerate() {
      sqlx::query(
        "INSERT INTO order_items (order_id, menu_item_id, name, price_cents, quantity, position) \
         VALUES ($1, $2, $3, $4, $5, $6)",
      )
      .bind(order.id)
      .bind(&line.menu_item_id)
      .bind(&line.name)
      .bind(line.price_cents)
      .bind(line.quantity)
      .bind(position as i32)
      .execute(&mut *tx)
      .await
      .map_err(storage_err)?;
    }

    sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
      .bind(order.user_id)
      .execute(&mut *tx)
      .await
      .map_err(storage_err)?;

    sqlx::query("UPDATE carts SET restaurant_id = NULL WHERE user_id = $1")
      .bind(order.user_id)
      .execute(&mut *tx)
      .await
      .map_err(storage_err)?;

    tx.commit().await.map_err(storage_err)
  }

  async fn get_order(&self, user_id: Uuid, order_id: Uuid) -> CoreResult<Option<Order>> {
    let head = sqlx::query_as::<_, OrderRow>(
      "SELECT id, user_id, restaurant_id, restaurant_name, delivery_address, total_amount_cents, \
       status, created_at FROM orders WHERE id = $1 AND user_id = $2",
    )
    .bind(order_id)
    .bind(user_id)
    .fetch_optional(&self.pool)
    .await
    .map_err(storage_err)?;

    let Some(head) = head else {
      return Ok(None);
    };

    let lines = sqlx::query_as::<_, OrderLineRow>(
      "SELECT order_id, menu_item_id, name, price_cents, quantity FROM order_items \
       WHERE order_id = $1 ORDER BY position",
    )
    .bind(order_id)
    .fetch_all(&self.pool)
    .await
    .map_err(storage_err)?;

    Ok(Some(assemble_order(head, lines)))
  }

  async fn list_orders(&self, user_id: Uuid) -> CoreResult<Vec<Order>> {
    let heads = sqlx::query_as::<_, OrderRow>(
      "SELECT id, user_id, restaurant_id, restaurant_name, delivery_address, total_amount_cents, \
       status, created_at FROM orders WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(&self.pool)
    .await
    .map_err(storage_err)?;

    if heads.is_empty() {
      return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = heads.iter().map(|h| h.id).collect();
    let lines = sqlx::query_as::<_, OrderLineRow>(
      "SELECT order_id, menu_item_id, name, price_cents, quantity FROM order_items \
       WHERE order_id = ANY($1) ORDER BY position",
    )
    .bind(&ids)
    .fetch_all(&self.pool)
    .await
    .map_err(storage_err)?;

    let mut by_order: HashMap<Uuid, Vec<OrderLineRow>> = HashMap::new();
    for line in lines {
      by_order.entry(line.order_id).or_default().push(line);
    }

    Ok(
      heads
        .into_iter()
        .map(|head| {
          let lines = by_order.remove(&head.id).unwrap_or_default();
          assemble_order(head, lines)
        })
        .collect(),
    )
  }
}
