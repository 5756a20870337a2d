//! Domain models
//!
//! Serde DTOs for the backend REST contracts plus the application config.

pub mod batch;
pub mod config;
pub mod library;
pub mod metadata;
pub mod tonie;
