// server/src/models/session.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-side bearer session. The token is the opaque value clients send
/// back in the `Authorization` header; nothing is encoded in it.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
  pub token: Uuid,
  pub user_id: Uuid,
  pub expires_at: DateTime<Utc>,
  pub created_at: DateTime<Utc>,
}

impl Session {
  pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
    self.expires_at <= now
  }
}
