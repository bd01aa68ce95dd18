//! Authorization routes.

pub mod login;
