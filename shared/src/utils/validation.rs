//! Common validation utilities

use serde::Serialize;
use std::collections::HashMap;

/// Validation error with field-level details
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Collection of validation errors
///
/// Rules accumulate independently; a payload can collect several violations
/// across fields before being rejected as a whole.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_error(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.add(ValidationError::new(field, message, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Group messages per field name for API serialization
    pub fn to_field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
        for error in &self.errors {
            field_errors
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        field_errors
    }

    /// Consume the collection, returning `Ok(())` when no rule failed
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Common validation functions
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    /// RFC-shaped email address pattern. Rejects empty local/domain parts
    /// and a second `@` anywhere in the address.
    static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern must compile")
    });

    /// Check if a string contains a non-whitespace character
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if an email address is well-formed
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }

    /// Check for at least one ASCII uppercase letter
    pub fn has_uppercase(value: &str) -> bool {
        value.chars().any(|c| c.is_ascii_uppercase())
    }

    /// Check for at least one ASCII lowercase letter
    pub fn has_lowercase(value: &str) -> bool {
        value.chars().any(|c| c.is_ascii_lowercase())
    }

    /// Check for at least one ASCII digit
    pub fn has_digit(value: &str) -> bool {
        value.chars().any(|c| c.is_ascii_digit())
    }

    /// Check for at least one character outside [A-Za-z0-9]
    pub fn has_special_char(value: &str) -> bool {
        value.chars().any(|c| !c.is_ascii_alphanumeric())
    }
}
