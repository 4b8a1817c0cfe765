// server/src/web/handlers/restaurant_handlers.rs

use actix_web::{web, HttpResponse};
use quickbite_core::Catalog;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListRestaurantsQuery {
  pub search: Option<String>,
  pub cuisine: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct MenuQuery {
  pub category: Option<String>,
}

#[instrument(name = "handler::list_restaurants", skip(app_state, query))]
pub async fn list_restaurants_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ListRestaurantsQuery>,
) -> Result<HttpResponse, AppError> {
  let restaurants = app_state
    .catalog
    .list_restaurants(query.search.as_deref(), query.cuisine.as_deref())
    .await?;

  info!("Fetched {} restaurants.", restaurants.len());
  Ok(HttpResponse::Ok().json(restaurants))
}

#[instrument(name = "handler::get_restaurant", skip(app_state, path), fields(restaurant_id = %path.as_ref()))]
pub async fn get_restaurant_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let restaurant_id = path.into_inner();

  match app_state.catalog.restaurant(&restaurant_id).await? {
    Some(restaurant) => Ok(HttpResponse::Ok().json(restaurant)),
    None => {
      warn!("Restaurant {} not found.", restaurant_id);
      Err(AppError::NotFound("Restaurant not found".to_string()))
    }
  }
}

#[instrument(name = "handler::list_menu", skip(app_state, path, query), fields(restaurant_id = %path.as_ref()))]
pub async fn list_menu_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  query: web::Query<MenuQuery>,
) -> Result<HttpResponse, AppError> {
  let restaurant_id = path.into_inner();
  let items = app_state
    .catalog
    .list_menu(&restaurant_id, query.category.as_deref())
    .await?;

  info!("Fetched {} menu items for restaurant {}.", items.len(), restaurant_id);
  Ok(HttpResponse::Ok().json(items))
}
