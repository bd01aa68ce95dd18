//! User account service module
//!
//! Profile, email and password updates plus lookup by email.

mod service;

#[cfg(test)]
mod tests;

pub use service::UserService;
