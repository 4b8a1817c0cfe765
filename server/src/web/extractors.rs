// server/src/web/extractors.rs

//! Request extractors. `AuthenticatedUser` is how every protected handler
//! receives its identity: the bearer token from the `Authorization` header is
//! resolved against the sessions table, and the handler gets a plain user id.
//! Core operations never see a request or a token.

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;

#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
  pub user_id: Uuid,
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
  let header = req.headers().get(actix_web::http::header::AUTHORIZATION)?;
  let value = header.to_str().ok()?;
  let token = value.strip_prefix("Bearer ").or_else(|| value.strip_prefix("bearer "))?;
  let token = token.trim();
  if token.is_empty() {
    None
  } else {
    Some(token.to_owned())
  }
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let state = req.app_data::<web::Data<AppState>>().cloned();
    let token = bearer_token(req);

    Box::pin(async move {
      let state =
        state.ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?;
      let Some(token) = token else {
        warn!("Request without bearer token rejected.");
        return Err(AppError::Auth("Authentication required.".to_string()));
      };

      match auth_service::resolve_session(&state.db_pool, &token).await? {
        Some(user_id) => Ok(AuthenticatedUser { user_id }),
        None => {
          warn!("Request with unknown or expired session token rejected.");
          Err(AppError::Auth("Invalid or expired session token.".to_string()))
        }
      }
    })
  }
}
