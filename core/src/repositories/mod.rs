//! Repository interfaces and in-memory test doubles.

pub mod family;
pub mod user;

pub use family::{FamilyRepository, MockFamilyRepository};
pub use user::{MockUserRepository, UserRepository};
