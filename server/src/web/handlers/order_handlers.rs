// server/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTO ---

fn default_payment_method() -> String {
  "card".to_string()
}

#[derive(Deserialize, Debug)]
pub struct PlaceOrderPayload {
  pub delivery_address: String,
  /// Accepted for wire compatibility and logged; payment processing is not
  /// part of this service.
  #[serde(default = "default_payment_method")]
  pub payment_method: String,
}

// --- Handler Implementations ---

#[instrument(
  name = "handler::place_order",
  skip(app_state, payload, auth_user),
  fields(user_id = %auth_user.user_id, payment_method = %payload.payment_method)
)]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<PlaceOrderPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let order = app_state
    .order_placer
    .place(auth_user.user_id, &payload.delivery_address)
    .await?;

  info!(order_id = %order.id, total_amount_cents = order.total_amount_cents, "Order placed.");
  Ok(HttpResponse::Created().json(json!({
    "message": "Order placed successfully",
    "order": order
  })))
}

#[instrument(name = "handler::list_orders", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let orders = app_state.order_placer.orders(auth_user.user_id).await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(
  name = "handler::get_order",
  skip(app_state, path, auth_user),
  fields(user_id = %auth_user.user_id, order_id = %path.as_ref())
)]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();
  let order = app_state.order_placer.order(auth_user.user_id, order_id).await?;
  Ok(HttpResponse::Ok().json(order))
}
