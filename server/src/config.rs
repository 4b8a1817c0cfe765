// server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  /// Flat delivery surcharge in cents, applied to non-empty carts.
  pub delivery_fee_cents: i64,

  /// Bearer sessions issued at register/login expire after this many hours.
  pub session_ttl_hours: i64,

  // Optional: for seeding the sample catalog on startup
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;

    let delivery_fee_cents = get_env("DELIVERY_FEE_CENTS")
      .unwrap_or_else(|_| quickbite_core::DEFAULT_DELIVERY_FEE_CENTS.to_string())
      .parse::<i64>()
      .map_err(|e| AppError::Config(format!("Invalid DELIVERY_FEE_CENTS: {}", e)))?;
    if delivery_fee_cents < 0 {
      return Err(AppError::Config(format!(
        "DELIVERY_FEE_CENTS must not be negative, got {}",
        delivery_fee_cents
      )));
    }

    let session_ttl_hours = get_env("SESSION_TTL_HOURS")
      .unwrap_or_else(|_| "24".to_string())
      .parse::<i64>()
      .map_err(|e| AppError::Config(format!("Invalid SESSION_TTL_HOURS: {}", e)))?;
    if session_ttl_hours <= 0 {
      return Err(AppError::Config(format!(
        "SESSION_TTL_HOURS must be positive, got {}",
        session_ttl_hours
      )));
    }

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      delivery_fee_cents,
      session_ttl_hours,
      seed_db,
    })
  }
}
