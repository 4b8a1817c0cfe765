// server/src/state.rs
use crate::config::AppConfig;
use crate::storage::PgCatalog;
use quickbite_core::{CartManager, OrderPlacer};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
  pub cart_manager: Arc<CartManager>,
  pub order_placer: Arc<OrderPlacer>,
  pub catalog: Arc<PgCatalog>,
  pub config: Arc<AppConfig>, // Share loaded config
}
