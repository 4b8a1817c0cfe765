// core/src/locks.rs

//! Per-user mutation serialization.
//!
//! Every cart mutation and order placement for a given user runs inside that
//! user's critical section, so concurrent requests apply one at a time in
//! arrival order (tokio's mutex is fair) and read-modify-write cycles cannot
//! lose updates. Different users never contend.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

/// Registry of per-user async mutexes.
///
/// The outer parking_lot lock only guards the map itself and is dropped
/// before the per-user lock is awaited, so it is never held across a
/// suspension point. Entries are a handful of bytes per user and are not
/// evicted.
#[derive(Default)]
pub struct UserLocks {
  locks: Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>,
}

impl UserLocks {
  pub fn new() -> Self {
    Self::default()
  }

  /// Acquires the user's critical section, waiting behind earlier holders.
  /// The guard is owned, so it can cross `.await` points in the caller.
  pub async fn acquire(&self, user_id: Uuid) -> OwnedMutexGuard<()> {
    let lock = {
      let mut map = self.locks.lock();
      Arc::clone(map.entry(user_id).or_default())
    };
    lock.lock_owned().await
  }
}
