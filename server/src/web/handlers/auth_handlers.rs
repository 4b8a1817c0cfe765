// server/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::User;
use crate::services::auth_service;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct RegisterPayload {
  pub email: String,
  pub password: String,
  pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct LoginPayload {
  pub email: String,
  pub password: String,
}

fn normalized_email(raw: &str) -> Result<String, AppError> {
  let email = raw.trim().to_lowercase();
  if email.is_empty() || !email.contains('@') {
    return Err(AppError::Validation("A valid email address is required.".to_string()));
  }
  Ok(email)
}

async fn fetch_user_by_email(state: &AppState, email: &str) -> Result<Option<User>, AppError> {
  let user =
    sqlx::query_as::<_, User>("SELECT id, email, name, password_hash, created_at FROM users WHERE email = $1")
      .bind(email)
      .fetch_optional(&state.db_pool)
      .await?;
  Ok(user)
}

// --- Handler Implementations ---

#[instrument(name = "handler::register", skip(app_state, payload), fields(email = %payload.email))]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<RegisterPayload>,
) -> Result<HttpResponse, AppError> {
  let email = normalized_email(&payload.email)?;
  let name = payload.name.trim();
  if name.is_empty() {
    return Err(AppError::Validation("Name is required.".to_string()));
  }

  if fetch_user_by_email(&app_state, &email).await?.is_some() {
    warn!("Registration attempt with an email that is already taken.");
    return Err(AppError::Validation("Email already registered".to_string()));
  }

  let user = User {
    id: Uuid::new_v4(),
    email,
    name: name.to_string(),
    password_hash: auth_service::hash_password(&payload.password)?,
    created_at: Utc::now(),
  };

  let inserted = sqlx::query("INSERT INTO users (id, email, name, password_hash, created_at) VALUES ($1, $2, $3, $4, $5)")
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.password_hash)
    .bind(user.created_at)
    .execute(&app_state.db_pool)
    .await;

  if let Err(err) = inserted {
    // Two concurrent registrations can both pass the lookup; the unique
    // index settles it.
    if err
      .as_database_error()
      .is_some_and(|db_err| db_err.is_unique_violation())
    {
      return Err(AppError::Validation("Email already registered".to_string()));
    }
    return Err(err.into());
  }

  let session = auth_service::create_session(&app_state.db_pool, user.id, app_state.config.session_ttl_hours).await?;
  info!(user_id = %user.id, "User registered.");

  Ok(HttpResponse::Created().json(json!({
    "token": session.token,
    "user": user
  })))
}

#[instrument(name = "handler::login", skip(app_state, payload), fields(email = %payload.email))]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<LoginPayload>,
) -> Result<HttpResponse, AppError> {
  let email = normalized_email(&payload.email)?;

  // One failure message for both unknown email and wrong password, so the
  // endpoint cannot be used to probe which emails exist.
  let invalid = || AppError::Auth("Invalid email or password.".to_string());

  let user = fetch_user_by_email(&app_state, &email).await?.ok_or_else(invalid)?;
  if !auth_service::verify_password(&user.password_hash, &payload.password)? {
    warn!(user_id = %user.id, "Login attempt with wrong password.");
    return Err(invalid());
  }

  let session = auth_service::create_session(&app_state.db_pool, user.id, app_state.config.session_ttl_hours).await?;
  info!(user_id = %user.id, "User logged in.");

  Ok(HttpResponse::Ok().json(json!({
    "token": session.token,
    "user": user
  })))
}

#[instrument(name = "handler::me", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn me_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let user =
    sqlx::query_as::<_, User>("SELECT id, email, name, password_hash, created_at FROM users WHERE id = $1")
      .bind(auth_user.user_id)
      .fetch_optional(&app_state.db_pool)
      .await?
      .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

  Ok(HttpResponse::Ok().json(user))
}
