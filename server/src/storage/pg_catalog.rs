// server/src/storage/pg_catalog.rs

use async_trait::async_trait;
use quickbite_core::{Catalog, Error as CoreError, MenuItem, Restaurant, Result as CoreResult};
use sqlx::PgPool;

use super::rows::{MenuItemRow, RestaurantRow};
use crate::errors::Result;

/// Read-only catalog over Postgres. Implements the core's `Catalog` lookups
/// and carries the browse queries (list/search restaurants, menu listings)
/// that the HTTP layer serves directly.
#[derive(Clone)]
pub struct PgCatalog {
  pool: PgPool,
}

fn catalog_err(err: sqlx::Error) -> CoreError {
  CoreError::Unavailable {
    source: anyhow::Error::new(err),
  }
}

impl PgCatalog {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// All restaurants, optionally narrowed by a case-insensitive name search
  /// and/or an exact cuisine filter.
  pub async fn list_restaurants(&self, search: Option<&str>, cuisine: Option<&str>) -> Result<Vec<Restaurant>> {
    let rows = sqlx::query_as::<_, RestaurantRow>(
      "SELECT id, name, description, image, cuisine_type, rating, delivery_time, min_order_cents \
       FROM restaurants \
       WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%') \
         AND ($2::text IS NULL OR cuisine_type = $2) \
       ORDER BY name",
    )
    .bind(search)
    .bind(cuisine)
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Restaurant::from).collect())
  }

  /// A restaurant's menu, optionally narrowed to one category. The list may
  /// be empty; menu browsing does not require the restaurant row to exist.
  pub async fn list_menu(&self, restaurant_id: &str, category: Option<&str>) -> Result<Vec<MenuItem>> {
    let rows = sqlx::query_as::<_, MenuItemRow>(
      "SELECT id, restaurant_id, name, description, price_cents, image, category, available \
       FROM menu_items \
       WHERE restaurant_id = $1 AND ($2::text IS NULL OR category = $2) \
       ORDER BY category, name",
    )
    .bind(restaurant_id)
    .bind(category)
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(MenuItem::from).collect())
  }
}

#[async_trait]
impl Catalog for PgCatalog {
  async fn menu_item(&self, id: &str) -> CoreResult<Option<MenuItem>> {
    let row = sqlx::query_as::<_, MenuItemRow>(
      "SELECT id, restaurant_id, name, description, price_cents, image, category, available \
       FROM menu_items WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(catalog_err)?;

    Ok(row.map(MenuItem::from))
  }

  async fn restaurant(&self, id: &str) -> CoreResult<Option<Restaurant>> {
    let row = sqlx::query_as::<_, RestaurantRow>(
      "SELECT id, name, description, image, cuisine_type, rating, delivery_time, min_order_cents \
       FROM restaurants WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(catalog_err)?;

    Ok(row.map(Restaurant::from))
  }
}
