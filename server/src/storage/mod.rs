// server/src/storage/mod.rs

//! Postgres implementations of the ordering core's collaborator traits, plus
//! the schema bootstrap and catalog browse queries the HTTP layer uses.

// Declare child modules
pub mod pg_catalog;
pub mod pg_storage;
pub mod rows;
pub mod schema;

// Re-export the implementations for convenient access
pub use pg_catalog::PgCatalog;
pub use pg_storage::PgStorage;
pub use schema::init_schema;
