//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Repository pattern implementations
//! - Reference-data seeding
//!
//! The schema itself lives in `infra/migrations`; the unique constraints
//! on `users.email` and `families.name` are the authoritative guards
//! behind the repository-level pre-checks.

pub mod connection;
pub mod mysql;
pub mod seed;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{MySqlFamilyRepository, MySqlUserRepository};
