//! Declarative payload validation evaluated before any store mutation.
//!
//! Rules are field-tagged and accumulate: every rule of a rule set runs,
//! so a payload can be rejected with several violations at once.

pub mod messages;
pub mod rules;

#[cfg(test)]
mod tests;

pub use rules::{
    validate_email_change, validate_password_change, validate_profile_update,
    validate_registration,
};
