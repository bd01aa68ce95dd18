//! Response-shaped value objects returned by the application services.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    /// Store-assigned user id
    pub id: u64,
    /// Registered email address
    pub email: String,
}

/// User projection exposed at the API boundary, without the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            birth_date: user.birth_date,
        }
    }
}

/// Result of a successful family creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyCreated {
    /// Store-assigned family id
    pub id: u64,
    /// Family name
    pub name: String,
}
