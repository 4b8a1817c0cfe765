// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Quantity must be at least 1, got {given}")]
  InvalidQuantity { given: i32 },

  #[error("Item '{menu_item_id}' is not in the cart")]
  ItemNotFound { menu_item_id: String },

  #[error("Cart is bound to restaurant '{in_cart}'; cannot add items from restaurant '{requested}'")]
  CrossRestaurant { in_cart: String, requested: String },

  #[error("Cart is empty")]
  EmptyCart,

  #[error("Delivery address is required")]
  MissingAddress,

  #[error("{entity} not found: {id}")]
  NotFound { entity: &'static str, id: String },

  #[error("Storage unavailable. Source: {source}")]
  Unavailable {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal error: {0}")]
  Internal(String),
}

impl Error {
  /// True for failures worth retrying (transient storage/transport trouble),
  /// false for precondition failures the caller must correct first.
  pub fn is_retryable(&self) -> bool {
    matches!(self, Error::Unavailable { .. })
  }
}

// Storage implementations report transport-level trouble as anyhow errors;
// everything crossing that seam becomes Unavailable, never a silent empty result.
impl From<AnyhowError> for Error {
  fn from(err: AnyhowError) -> Self {
    Error::Unavailable { source: err }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
