// server/src/storage/schema.rs

//! Startup schema bootstrap. Every statement is idempotent, so running it on
//! each boot converges instead of failing.

use sqlx::PgPool;
use tracing::info;

use crate::errors::Result;

const SCHEMA_STATEMENTS: &[&str] = &[
  r#"
  CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS sessions (
    token UUID PRIMARY KEY,
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    expires_at TIMESTAMPTZ NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS restaurants (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    image TEXT NOT NULL DEFAULT '',
    cuisine_type TEXT NOT NULL DEFAULT '',
    rating DOUBLE PRECISION NOT NULL DEFAULT 0,
    delivery_time TEXT NOT NULL DEFAULT '',
    min_order_cents BIGINT NOT NULL DEFAULT 0
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS menu_items (
    id TEXT PRIMARY KEY,
    restaurant_id TEXT NOT NULL REFERENCES restaurants(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    price_cents BIGINT NOT NULL,
    image TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL DEFAULT '',
    available BOOLEAN NOT NULL DEFAULT TRUE
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS carts (
    user_id UUID PRIMARY KEY,
    restaurant_id TEXT
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS cart_items (
    user_id UUID NOT NULL REFERENCES carts(user_id) ON DELETE CASCADE,
    menu_item_id TEXT NOT NULL,
    name TEXT NOT NULL,
    price_cents BIGINT NOT NULL,
    quantity INTEGER NOT NULL CHECK (quantity >= 1),
    image TEXT NOT NULL DEFAULT '',
    position INTEGER NOT NULL,
    PRIMARY KEY (user_id, menu_item_id)
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS orders (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL,
    restaurant_id TEXT NOT NULL,
    restaurant_name TEXT NOT NULL,
    delivery_address TEXT NOT NULL,
    total_amount_cents BIGINT NOT NULL,
    status TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS order_items (
    order_id UUID NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
    menu_item_id TEXT NOT NULL,
    name TEXT NOT NULL,
    price_cents BIGINT NOT NULL,
    quantity INTEGER NOT NULL,
    position INTEGER NOT NULL,
    PRIMARY KEY (order_id, position)
  )
  "#,
  r#"
  CREATE INDEX IF NOT EXISTS idx_orders_user_created ON orders (user_id, created_at DESC)
  "#,
  r#"
  CREATE INDEX IF NOT EXISTS idx_menu_items_restaurant ON menu_items (restaurant_id)
  "#,
  r#"
  CREATE INDEX IF NOT EXISTS idx_sessions_expiry ON sessions (expires_at)
  "#,
];

pub async fn init_schema(pool: &PgPool) -> Result<()> {
  for statement in SCHEMA_STATEMENTS {
    sqlx::query(statement).execute(pool).await?;
  }
  info!("Database schema is in place.");
  Ok(())
}
