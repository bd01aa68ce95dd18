//! HTTP route handlers.

pub mod auth;
pub mod family;
pub mod user;
