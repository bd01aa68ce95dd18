//! Domain-specific error types and error handling.
//!
//! Business-rule rejections are ordinary values at every layer boundary;
//! exceptional control flow is reserved for infrastructure failures such
//! as a lost database connection.

mod types;

// Re-export all error types and utilities
pub use types::{ErrorResponse, FamilyError, PasswordError, TokenError, UserError};

use std::fmt;

use thiserror::Error;

use fh_shared::validation::{ValidationError, ValidationErrors};

/// Field-tagged validation failures accumulated from a rule set
///
/// Carries every violated rule, each tagged with the offending field and a
/// fixed human-readable message.
#[derive(Debug)]
pub struct ValidationFailures(Vec<ValidationError>);

impl ValidationFailures {
    pub fn failures(&self) -> &[ValidationError] {
        &self.0
    }

    /// Group messages per field name
    pub fn to_field_errors(&self) -> std::collections::HashMap<String, Vec<String>> {
        let mut field_errors: std::collections::HashMap<String, Vec<String>> = Default::default();
        for failure in &self.0 {
            field_errors
                .entry(failure.field.clone())
                .or_default()
                .push(failure.message.clone());
        }
        field_errors
    }
}

impl From<ValidationErrors> for ValidationFailures {
    fn from(errors: ValidationErrors) -> Self {
        Self(errors.errors().to_vec())
    }
}

impl fmt::Display for ValidationFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

impl std::error::Error for ValidationFailures {}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailures),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Family(#[from] FamilyError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable error code for programmatic handling at the API boundary
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "VALIDATION_FAILED",
            DomainError::User(e) => e.code(),
            DomainError::Family(e) => e.code(),
            DomainError::Password(e) => e.code(),
            DomainError::Token(e) => e.code(),
            DomainError::Database { .. } => "DATABASE_ERROR",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
