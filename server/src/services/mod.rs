// server/src/services/mod.rs

// Declare service modules
pub mod auth_service;
