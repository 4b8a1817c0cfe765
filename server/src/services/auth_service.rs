// server/src/services/auth_service.rs

//! Password hashing/verification and bearer session management.

use argon2::{
  password_hash::{
    rand_core::OsRng, // For generating random salts
    PasswordHash,
    PasswordHasher,   // The main trait for hashing
    PasswordVerifier, // The main trait for verifying
    SaltString,
  },
  Argon2, // The Argon2 algorithm instance
};
use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::Session;

/// Hashes a plain-text password using Argon2 with a fresh random salt.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  let argon2_hasher = Argon2::default(); // Default Argon2 parameters (recommended)

  match argon2_hasher.hash_password(password.as_bytes(), &salt) {
    Ok(password_hash_obj) => Ok(password_hash_obj.to_string()),
    Err(argon_err) => {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      Err(AppError::Internal(format!(
        "Password hashing process failed: {}",
        argon_err
      )))
    }
  }
}

/// Verifies a plain-text password against a stored Argon2 hash.
///
/// Returns `Ok(false)` for a well-formed hash that simply does not match;
/// `Err` is reserved for malformed hashes and internal verification failures.
#[instrument(name = "auth_service::verify_password", skip(hashed_password_str, provided_password), err(Display))]
pub fn verify_password(hashed_password_str: &str, provided_password: &str) -> Result<bool> {
  if hashed_password_str.is_empty() || provided_password.is_empty() {
    return Ok(false);
  }

  let parsed_hash = match PasswordHash::new(hashed_password_str) {
    Ok(ph) => ph,
    Err(parse_err) => {
      error!(error = %parse_err, "Failed to parse stored password hash string.");
      return Err(AppError::Internal(format!(
        "Invalid stored password hash format: {}",
        parse_err
      )));
    }
  };

  let argon2_verifier = Argon2::default();
  match argon2_verifier.verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password verification failed: passwords do not match.");
      Ok(false)
    }
    Err(other_argon_err) => {
      error!(error = %other_argon_err, "Argon2 password verification process encountered an error.");
      Err(AppError::Internal(format!(
        "Password verification process failed: {}",
        other_argon_err
      )))
    }
  }
}

/// Issues a fresh bearer session for the user and persists it.
#[instrument(name = "auth_service::create_session", skip(pool), fields(user_id = %user_id))]
pub async fn create_session(pool: &PgPool, user_id: Uuid, ttl_hours: i64) -> Result<Session> {
  let now = Utc::now();
  let session = Session {
    token: Uuid::new_v4(),
    user_id,
    expires_at: now + Duration::hours(ttl_hours),
    created_at: now,
  };

  sqlx::query("INSERT INTO sessions (token, user_id, expires_at, created_at) VALUES ($1, $2, $3, $4)")
    .bind(session.token)
    .bind(session.user_id)
    .bind(session.expires_at)
    .bind(session.created_at)
    .execute(pool)
    .await?;

  debug!(token = %session.token, "Session created.");
  Ok(session)
}

/// Resolves a raw bearer token to a user id. Unknown, malformed, and expired
/// tokens all resolve to `None`; `Err` means the lookup itself failed.
#[instrument(name = "auth_service::resolve_session", skip(pool, raw_token))]
pub async fn resolve_session(pool: &PgPool, raw_token: &str) -> Result<Option<Uuid>> {
  let token = match Uuid::parse_str(raw_token.trim()) {
    Ok(token) => token,
    Err(_) => return Ok(None), // Not one of ours
  };

  let session = sqlx::query_as::<_, Session>("SELECT token, user_id, expires_at, created_at FROM sessions WHERE token = $1")
    .bind(token)
    .fetch_optional(pool)
    .await?;

  Ok(session.filter(|s| !s.is_expired_at(Utc::now())).map(|s| s.user_id))
}
