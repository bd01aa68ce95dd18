//! Error response shaping and domain-error to HTTP status mapping.

use std::collections::HashMap;

use actix_web::HttpResponse;
use serde::Serialize;

use fh_core::errors::{DomainError, FamilyError, PasswordError, TokenError, UserError};

/// Error body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable error code for programmatic handling
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Per-field validation messages, when the failure is a validation one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<HashMap<String, Vec<String>>>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            field_errors: None,
        }
    }

    /// Generic body for credential mismatches; deliberately does not say
    /// whether the email or the password was wrong
    pub fn unauthorized() -> Self {
        Self::new("UNAUTHORIZED", "Email or password are invalid")
    }
}

/// Map a domain error to its HTTP response
///
/// Infrastructure failures are reported with a generic message; internal
/// detail stays in the server log.
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Validation(failures) => {
            let body = ErrorBody {
                error: err.code().to_string(),
                message: "Validation failed".to_string(),
                field_errors: Some(failures.to_field_errors()),
            };
            HttpResponse::BadRequest().json(body)
        }
        DomainError::User(user_err) => {
            let body = ErrorBody::new(err.code(), err.to_string());
            match user_err {
                UserError::NotFoundByEmail { .. } | UserError::NotFoundById { .. } => {
                    HttpResponse::NotFound().json(body)
                }
                UserError::EmailTaken => HttpResponse::Conflict().json(body),
                UserError::EmptyEmail | UserError::SameEmail => {
                    HttpResponse::BadRequest().json(body)
                }
            }
        }
        DomainError::Family(family_err) => {
            let body = ErrorBody::new(err.code(), err.to_string());
            match family_err {
                FamilyError::NotFound { .. } => HttpResponse::NotFound().json(body),
                FamilyError::NameTaken { .. } => HttpResponse::Conflict().json(body),
                FamilyError::EmptyName => HttpResponse::BadRequest().json(body),
            }
        }
        DomainError::Password(password_err) => {
            let body = ErrorBody::new(err.code(), err.to_string());
            match password_err {
                PasswordError::SameAsCurrent => HttpResponse::BadRequest().json(body),
                PasswordError::HashingFailed => HttpResponse::InternalServerError()
                    .json(ErrorBody::new(err.code(), "Internal server error")),
            }
        }
        DomainError::Token(token_err) => {
            let body = match token_err {
                TokenError::GenerationFailed => ErrorBody::new(err.code(), "Internal server error"),
                _ => ErrorBody::new(err.code(), err.to_string()),
            };
            HttpResponse::InternalServerError().json(body)
        }
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError()
                .json(ErrorBody::new(err.code(), "Internal server error"))
        }
    }
}

/// Map DTO-level validator failures to the same 400 shape the core
/// validation layer produces
pub fn validator_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
    for (field, violations) in errors.field_errors() {
        let messages = violations
            .iter()
            .map(|v| {
                v.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| v.code.to_string())
            })
            .collect();
        field_errors.insert(field.to_string(), messages);
    }

    HttpResponse::BadRequest().json(ErrorBody {
        error: "VALIDATION_FAILED".to_string(),
        message: "Validation failed".to_string(),
        field_errors: Some(field_errors),
    })
}
