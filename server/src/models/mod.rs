// server/src/models/mod.rs

//! Data structures representing database entities owned by the server crate.
//! Cart, order and catalog types live in `quickbite_core`; only identity and
//! session records are server-side concerns.

// Declare child modules for each model
pub mod session;
pub mod user;

// Re-export the model structs for convenient access
pub use session::Session;
pub use user::User;
