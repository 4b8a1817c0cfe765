// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use quickbite_core::Error as CoreError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Service Unavailable: {0}")]
  Unavailable(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Every ordering-core failure has one HTTP meaning; the mapping lives here so
// handlers can use `?` on core calls and nothing else.
impl From<CoreError> for AppError {
  fn from(err: CoreError) -> Self {
    match &err {
      CoreError::InvalidQuantity { .. } | CoreError::EmptyCart | CoreError::MissingAddress => {
        AppError::Validation(err.to_string())
      }
      CoreError::ItemNotFound { .. } | CoreError::NotFound { .. } => AppError::NotFound(err.to_string()),
      CoreError::CrossRestaurant { .. } => AppError::Conflict(err.to_string()),
      CoreError::Unavailable { .. } => AppError::Unavailable(err.to_string()),
      CoreError::Internal(m) => AppError::Internal(m.clone()),
    }
  }
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in handlers using `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::Auth(m) => HttpResponse::Unauthorized().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Conflict(m) => HttpResponse::Conflict().json(json!({"error": m})),
      AppError::Unavailable(m) => HttpResponse::ServiceUnavailable().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;
  use quickbite_core::Error as CoreError;

  #[test]
  fn core_precondition_failures_map_to_400() {
    for err in [
      CoreError::InvalidQuantity { given: 0 },
      CoreError::EmptyCart,
      CoreError::MissingAddress,
    ] {
      let app_err = AppError::from(err);
      assert_eq!(app_err.error_response().status(), StatusCode::BAD_REQUEST);
    }
  }

  #[test]
  fn cross_restaurant_maps_to_409() {
    let err = AppError::from(CoreError::CrossRestaurant {
      in_cart: "rest1".into(),
      requested: "rest2".into(),
    });
    assert_eq!(err.error_response().status(), StatusCode::CONFLICT);
  }

  #[test]
  fn missing_entities_map_to_404() {
    for err in [
      CoreError::ItemNotFound {
        menu_item_id: "menu1".into(),
      },
      CoreError::NotFound {
        entity: "Order",
        id: "abc".into(),
      },
    ] {
      let app_err = AppError::from(err);
      assert_eq!(app_err.error_response().status(), StatusCode::NOT_FOUND);
    }
  }

  #[test]
  fn storage_outage_maps_to_503() {
    let err = AppError::from(CoreError::Unavailable {
      source: anyhow::anyhow!("connection refused"),
    });
    assert_eq!(err.error_response().status(), StatusCode::SERVICE_UNAVAILABLE);
  }

  #[test]
  fn auth_maps_to_401() {
    let err = AppError::Auth("Invalid or expired session token".into());
    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
  }
}
