// server/src/storage/rows.rs

//! Row structs for the runtime sqlx query API, with conversions into the
//! core's domain types. The core crate carries no sqlx dependency, so the
//! `FromRow` derives live here.

use chrono::{DateTime, Utc};
use quickbite_core::{Cart, CartItem, MenuItem, Order, OrderLine, OrderStatus, Restaurant};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow)]
pub struct CartRow {
  pub user_id: Uuid,
  pub restaurant_id: Option<String>,
}

#[derive(Debug, FromRow)]
pub struct CartItemRow {
  pub menu_item_id: String,
  pub name: String,
  pub price_cents: i64,
  pub quantity: i32,
  pub image: String,
}

impl From<CartItemRow> for CartItem {
  fn from(row: CartItemRow) -> Self {
    CartItem {
      menu_item_id: row.menu_item_id,
      name: row.name,
      price_cents: row.price_cents,
      quantity: row.quantity,
      image: row.image,
    }
  }
}

pub fn assemble_cart(row: Option<CartRow>, items: Vec<CartItemRow>, user_id: Uuid) -> Cart {
  match row {
    Some(row) => Cart {
      user_id: row.user_id,
      restaurant_id: row.restaurant_id,
      items: items.into_iter().map(CartItem::from).collect(),
    },
    None => Cart::empty(user_id),
  }
}

#[derive(Debug, FromRow)]
pub struct OrderRow {
  pub id: Uuid,
  pub user_id: Uuid,
  pub restaurant_id: String,
  pub restaurant_name: String,
  pub delivery_address: String,
  pub total_amount_cents: i64,
  pub status: String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct OrderLineRow {
  pub order_id: Uuid,
  pub menu_item_id: String,
  pub name: String,
  pub price_cents: i64,
  pub quantity: i32,
}

impl From<OrderLineRow> for OrderLine {
  fn from(row: OrderLineRow) -> Self {
    OrderLine {
      menu_item_id: row.menu_item_id,
      name: row.name,
      price_cents: row.price_cents,
      quantity: row.quantity,
    }
  }
}

pub fn assemble_order(row: OrderRow, lines: Vec<OrderLineRow>) -> Order {
  Order {
    id: row.id,
    user_id: row.user_id,
    restaurant_id: row.restaurant_id,
    restaurant_name: row.restaurant_name,
    items: lines.into_iter().map(OrderLine::from).collect(),
    delivery_address: row.delivery_address,
    total_amount_cents: row.total_amount_cents,
    // Free-form column: unknown values must render, not fail the read.
    status: OrderStatus::from(row.status),
    created_at: row.created_at,
  }
}

#[derive(Debug, FromRow)]
pub struct RestaurantRow {
  pub id: String,
  pub name: String,
  pub description: String,
  pub image: String,
  pub cuisine_type: String,
  pub rating: f64,
  pub delivery_time: String,
  pub min_order_cents: i64,
}

impl From<RestaurantRow> for Restaurant {
  fn from(row: RestaurantRow) -> Self {
    Restaurant {
      id: row.id,
      name: row.name,
      description: row.description,
      image: row.image,
      cuisine_type: row.cuisine_type,
      rating: row.rating,
      delivery_time: row.delivery_time,
      min_order_cents: row.min_order_cents,
    }
  }
}

#[derive(Debug, FromRow)]
pub struct MenuItemRow {
  pub id: String,
  pub restaurant_id: String,
  pub name: String,
  pub description: String,
  pub price_cents: i64,
  pub image: String,
  pub category: String,
  pub available: bool,
}

impl From<MenuItemRow> for MenuItem {
  fn from(row: MenuItemRow) -> Self {
    MenuItem {
      id: row.id,
      restaurant_id: row.restaurant_id,
      name: row.name,
      description: row.description,
      price_cents: row.price_cents,
      image: row.image,
      category: row.category,
      available: row.available,
    }
  }
}
