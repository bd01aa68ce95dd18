//! Request-shaped value objects accepted by the application services.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registration payload, validated before any store mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
}

/// Email change payload; both addresses must be valid and distinct
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailChange {
    pub old_email: String,
    pub new_email: String,
}

/// Password change payload; the new password must satisfy the full policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub email: String,
    pub new_password: String,
}
