//! Request and response DTOs for the HTTP boundary.

pub mod auth;
pub mod error;
pub mod family;
pub mod user;
