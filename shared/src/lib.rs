//! Shared utilities and common types for the FamHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Validation utilities

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig};
pub use utils::validation;
