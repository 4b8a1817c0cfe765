// server/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod models;
mod seed;
mod services;
mod state;
mod storage;
mod web;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::storage::{PgCatalog, PgStorage};

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use quickbite_core::{CartManager, OrderPlacer, UserLocks};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting QuickBite server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Initialize Database Pool
  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  // Bring the schema up; every statement is idempotent.
  if let Err(e) = storage::init_schema(&db_pool).await {
    tracing::error!(error = %e, "Failed to initialize database schema.");
    panic!("Schema initialization error: {}", e);
  }

  // Seed the sample catalog if configured
  if app_config.seed_db {
    if let Err(e) = seed::seed_db(&db_pool).await {
      tracing::error!(error = %e, "Failed to seed database.");
    }
  }

  // Wire the ordering core over Postgres. The cart manager and order placer
  // share one lock registry so all mutations for a user serialize, whichever
  // engine they go through.
  let pg_storage = Arc::new(PgStorage::new(db_pool.clone()));
  let pg_catalog = Arc::new(PgCatalog::new(db_pool.clone()));
  let user_locks = Arc::new(UserLocks::new());

  let cart_manager = Arc::new(CartManager::new(
    pg_storage.clone(),
    pg_catalog.clone(),
    user_locks.clone(),
    app_config.delivery_fee_cents,
  ));
  let order_placer = Arc::new(OrderPlacer::new(
    pg_storage,
    pg_catalog.clone(),
    user_locks,
    app_config.delivery_fee_cents,
  ));

  // Create AppState
  let app_state = AppState {
    db_pool,
    cart_manager,
    order_placer,
    catalog: pg_catalog,
    config: app_config.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
