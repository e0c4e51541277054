// Declare all modules
pub mod admin;
pub mod auth;
pub mod files;
pub mod toolkit;
pub mod utils;

// No re-exports here as they're handled in lib.rs
