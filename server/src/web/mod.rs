// server/src/web/mod.rs

// Declare child modules
pub mod extractors;
pub mod handlers;
pub mod routes;

// Re-export routing configuration for main.rs.
pub use routes::configure_app_routes;
