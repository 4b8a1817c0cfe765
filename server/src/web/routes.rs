// server/src/web/routes.rs

use actix_web::web;

// Liveness probe. Deeper checks (database reachability) belong in a separate
// readiness endpoint if one is ever needed.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Authentication Routes
      .service(
        web::scope("/auth")
          .route(
            "/register",
            web::post().to(crate::web::handlers::auth_handlers::register_handler),
          )
          .route(
            "/login",
            web::post().to(crate::web::handlers::auth_handlers::login_handler),
          )
          .route("/me", web::get().to(crate::web::handlers::auth_handlers::me_handler)),
      )
      // Restaurant / Menu Browsing Routes (public)
      .service(
        web::scope("/restaurants")
          .route(
            "",
            web::get().to(crate::web::handlers::restaurant_handlers::list_restaurants_handler),
          )
          .route(
            "/{restaurant_id}",
            web::get().to(crate::web::handlers::restaurant_handlers::get_restaurant_handler),
          )
          .route(
            "/{restaurant_id}/menu",
            web::get().to(crate::web::handlers::restaurant_handlers::list_menu_handler),
          ),
      )
      // Cart Routes (require a bearer session)
      .service(
        web::scope("/cart")
          .route("", web::get().to(crate::web::handlers::cart_handlers::get_cart_handler))
          .route(
            "/add",
            web::post().to(crate::web::handlers::cart_handlers::add_to_cart_handler),
          )
          .route(
            "/update",
            web::put().to(crate::web::handlers::cart_handlers::update_cart_handler),
          )
          .route(
            "/remove/{menu_item_id}",
            web::delete().to(crate::web::handlers::cart_handlers::remove_from_cart_handler),
          )
          .route(
            "/clear",
            web::delete().to(crate::web::handlers::cart_handlers::clear_cart_handler),
          ),
      )
      // Order Routes (require a bearer session)
      .service(
        web::scope("/orders")
          .route(
            "",
            web::post().to(crate::web::handlers::order_handlers::place_order_handler),
          )
          .route(
            "",
            web::get().to(crate::web::handlers::order_handlers::list_orders_handler),
          )
          .route(
            "/{order_id}",
            web::get().to(crate::web::handlers::order_handlers::get_order_handler),
          ),
      ),
  );
}
