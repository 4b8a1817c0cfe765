// server/src/web/handlers/cart_handlers.rs

//! Cart endpoints. Every mutation responds with the full updated cart
//! (items plus computed totals) so the client renders committed server state
//! instead of recomputing its own.

use actix_web::{web, HttpResponse};
use quickbite_core::Catalog;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTOs ---

fn default_quantity() -> i32 {
  1
}

#[derive(Deserialize, Debug)]
pub struct AddToCartPayload {
  pub menu_item_id: String,
  /// Sent by clients alongside the item id; checked against the catalog's
  /// own binding, which stays authoritative.
  pub restaurant_id: String,
  #[serde(default = "default_quantity")]
  pub quantity: i32,
}

#[derive(Deserialize, Debug)]
pub struct UpdateCartPayload {
  pub menu_item_id: String,
  pub quantity: i32,
}

// --- Handler Implementations ---

#[instrument(name = "handler::get_cart", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let view = app_state.cart_manager.cart(auth_user.user_id).await?;
  Ok(HttpResponse::Ok().json(view))
}

#[instrument(
  name = "handler::add_to_cart",
  skip(app_state, payload, auth_user),
  fields(user_id = %auth_user.user_id, menu_item_id = %payload.menu_item_id, quantity = payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AddToCartPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  // The payload names a restaurant, but the catalog's item binding decides.
  // A contradiction means a stale or tampered client.
  if let Some(item) = app_state.catalog.menu_item(&payload.menu_item_id).await? {
    if item.restaurant_id != payload.restaurant_id {
      warn!(
        claimed = %payload.restaurant_id,
        actual = %item.restaurant_id,
        "Add-to-cart payload contradicts the catalog's restaurant binding."
      );
      return Err(AppError::Validation(
        "Item does not belong to the given restaurant.".to_string(),
      ));
    }
  }

  let view = app_state
    .cart_manager
    .add_item(auth_user.user_id, &payload.menu_item_id, payload.quantity)
    .await?;

  info!("Item added to cart.");
  Ok(HttpResponse::Ok().json(view))
}

#[instrument(
  name = "handler::update_cart",
  skip(app_state, payload, auth_user),
  fields(user_id = %auth_user.user_id, menu_item_id = %payload.menu_item_id, quantity = payload.quantity)
)]
pub async fn update_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<UpdateCartPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let view = app_state
    .cart_manager
    .update_quantity(auth_user.user_id, &payload.menu_item_id, payload.quantity)
    .await?;

  Ok(HttpResponse::Ok().json(view))
}

#[instrument(
  name = "handler::remove_from_cart",
  skip(app_state, path, auth_user),
  fields(user_id = %auth_user.user_id, menu_item_id = %path.as_ref())
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let menu_item_id = path.into_inner();
  let view = app_state
    .cart_manager
    .remove_item(auth_user.user_id, &menu_item_id)
    .await?;

  Ok(HttpResponse::Ok().json(view))
}

#[instrument(name = "handler::clear_cart", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let view = app_state.cart_manager.clear(auth_user.user_id).await?;

  info!("Cart cleared.");
  Ok(HttpResponse::Ok().json(view))
}
