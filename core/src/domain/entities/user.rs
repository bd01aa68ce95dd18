//! User entity representing a registered account in the FamHub system.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing a registered account
///
/// The `password_hash` field only ever holds the output of the password
/// hasher; plaintext passwords never cross the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store
    pub id: u64,

    /// Email address, unique across all users
    pub email: String,

    /// Opaque password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Date of birth
    pub birth_date: NaiveDate,

    /// Timestamp when the account was registered
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// The user's display name, "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for creating a user; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub registered_at: DateTime<Utc>,
}

impl NewUser {
    /// Creates a new registration payload stamped with the current time
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            registered_at: Utc::now(),
        }
    }

    /// Materialize the persisted entity once the store has assigned an id
    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            registered_at: self.registered_at,
        }
    }
}

/// Mutable profile fields, keyed by the account email
///
/// Applying an update overwrites first/last name and birth date while
/// preserving id, email and password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfileUpdate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
}
