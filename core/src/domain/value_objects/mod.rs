//! Value objects crossing the service boundary.

pub mod requests;
pub mod responses;

pub use requests::{EmailChange, PasswordChange, RegisterUser};
pub use responses::{FamilyCreated, RegisteredUser, UserView};
