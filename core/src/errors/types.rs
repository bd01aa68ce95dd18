//! Typed errors for user, family, password and token operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User store errors
#[derive(Error, Debug)]
pub enum UserError {
    #[error("Mail address is empty!")]
    EmptyEmail,

    #[error("Mail address already exists!")]
    EmailTaken,

    #[error("Could not find user with email: {email}")]
    NotFoundByEmail { email: String },

    #[error("Could not find user with id: {id}")]
    NotFoundById { id: u64 },

    #[error("New mail address equals the current one")]
    SameEmail,
}

impl UserError {
    pub fn code(&self) -> &'static str {
        match self {
            UserError::EmptyEmail => "EMAIL_EMPTY",
            UserError::EmailTaken => "EMAIL_TAKEN",
            UserError::NotFoundByEmail { .. } | UserError::NotFoundById { .. } => "USER_NOT_FOUND",
            UserError::SameEmail => "EMAIL_UNCHANGED",
        }
    }
}

/// Family store errors
#[derive(Error, Debug)]
pub enum FamilyError {
    #[error("Family name is empty")]
    EmptyName,

    #[error("Family with name {name} already exists!")]
    NameTaken { name: String },

    #[error("Could not find family with id: {id}")]
    NotFound { id: u64 },
}

impl FamilyError {
    pub fn code(&self) -> &'static str {
        match self {
            FamilyError::EmptyName => "FAMILY_NAME_EMPTY",
            FamilyError::NameTaken { .. } => "FAMILY_NAME_TAKEN",
            FamilyError::NotFound { .. } => "FAMILY_NOT_FOUND",
        }
    }
}

/// Password handling errors
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("New password equals the current password")]
    SameAsCurrent,

    #[error("Password hashing failed")]
    HashingFailed,
}

impl PasswordError {
    pub fn code(&self) -> &'static str {
        match self {
            PasswordError::SameAsCurrent => "PASSWORD_UNCHANGED",
            PasswordError::HashingFailed => "PASSWORD_HASHING_FAILED",
        }
    }
}

/// Token issuance and validation errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    GenerationFailed,
}

impl TokenError {
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::InvalidSignature => "TOKEN_INVALID_SIGNATURE",
            TokenError::InvalidClaims => "TOKEN_INVALID_CLAIMS",
            TokenError::GenerationFailed => "TOKEN_GENERATION_FAILED",
        }
    }
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl From<&crate::errors::DomainError> for ErrorResponse {
    fn from(err: &crate::errors::DomainError) -> Self {
        ErrorResponse::new(err.code(), err)
    }
}
