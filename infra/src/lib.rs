//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the FamHub
//! application. It provides the concrete MySQL implementations of the
//! repository traits defined in `fh_core`, connection-pool management and
//! reference-data seeding.

pub mod database;

// Re-export commonly used types
pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlFamilyRepository, MySqlUserRepository};
pub use database::seed::seed_family_roles;
