//! Rule sets for the payloads accepted by the application services.

use fh_shared::validation::{validators, ValidationErrors};

use crate::domain::entities::user::UserProfileUpdate;
use crate::domain::value_objects::{EmailChange, PasswordChange, RegisterUser};
use crate::errors::ValidationFailures;

/// Password length bounds, inclusive
const PASSWORD_MIN_LENGTH: usize = 8;
const PASSWORD_MAX_LENGTH: usize = 64;

/// Name field length bound, inclusive
const NAME_MAX_LENGTH: usize = 64;

/// Validate a registration payload
pub fn validate_registration(payload: &RegisterUser) -> Result<(), ValidationFailures> {
    let mut errors = ValidationErrors::new();
    check_email(&mut errors, "email", &payload.email);
    check_password(&mut errors, "password", &payload.password);
    check_name(&mut errors, "first_name", &payload.first_name);
    check_name(&mut errors, "last_name", &payload.last_name);
    finish(errors)
}

/// Validate an email change payload; both addresses must be well-formed
/// and mutually distinct
pub fn validate_email_change(payload: &EmailChange) -> Result<(), ValidationFailures> {
    let mut errors = ValidationErrors::new();
    check_email(&mut errors, "old_email", &payload.old_email);
    check_email(&mut errors, "new_email", &payload.new_email);
    if payload.old_email == payload.new_email {
        errors.add_error("new_email", super::messages::email::SAME_AS_OLD, "SAME_EMAIL");
    }
    finish(errors)
}

/// Validate a password change payload; the new password must satisfy the
/// full complexity policy
pub fn validate_password_change(payload: &PasswordChange) -> Result<(), ValidationFailures> {
    let mut errors = ValidationErrors::new();
    check_email(&mut errors, "email", &payload.email);
    check_password(&mut errors, "new_password", &payload.new_password);
    finish(errors)
}

/// Validate a profile update payload
pub fn validate_profile_update(payload: &UserProfileUpdate) -> Result<(), ValidationFailures> {
    let mut errors = ValidationErrors::new();
    check_email(&mut errors, "email", &payload.email);
    check_name(&mut errors, "first_name", &payload.first_name);
    check_name(&mut errors, "last_name", &payload.last_name);
    finish(errors)
}

fn finish(errors: ValidationErrors) -> Result<(), ValidationFailures> {
    errors.into_result().map_err(ValidationFailures::from)
}

fn check_email(errors: &mut ValidationErrors, field: &str, value: &str) {
    if !validators::not_blank(value) {
        errors.add_error(field, super::messages::email::EMPTY, "EMPTY");
    } else if !validators::is_valid_email(value) {
        errors.add_error(field, super::messages::email::NOT_VALID, "EMAIL_FORMAT");
    }
}

fn check_password(errors: &mut ValidationErrors, field: &str, value: &str) {
    use super::messages::password;

    if value.chars().count() < PASSWORD_MIN_LENGTH {
        errors.add_error(field, password::MINIMUM_LENGTH, "MIN_LENGTH");
    }
    if value.chars().count() > PASSWORD_MAX_LENGTH {
        errors.add_error(field, password::MAXIMUM_LENGTH, "MAX_LENGTH");
    }
    if !validators::has_uppercase(value) {
        errors.add_error(field, password::UPPERCASE_LETTER, "UPPERCASE");
    }
    if !validators::has_lowercase(value) {
        errors.add_error(field, password::LOWERCASE_LETTER, "LOWERCASE");
    }
    if !validators::has_digit(value) {
        errors.add_error(field, password::DIGIT, "DIGIT");
    }
    if !validators::has_special_char(value) {
        errors.add_error(field, password::SPECIAL_CHARS, "SPECIAL_CHARS");
    }
}

fn check_name(errors: &mut ValidationErrors, field: &str, value: &str) {
    use super::messages::name;

    if !validators::not_blank(value) {
        errors.add_error(field, name::EMPTY, "EMPTY");
    } else if value.chars().count() > NAME_MAX_LENGTH {
        errors.add_error(field, name::TOO_LONG, "MAX_LENGTH");
    }
}
