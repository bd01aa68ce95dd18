//! Trait definition for the password hashing capability.

use crate::errors::DomainResult;

/// One-way password hashing and verification
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into an opaque, salted hash string
    fn hash(&self, password: &str) -> DomainResult<String>;

    /// Verify a plaintext password against a stored hash
    ///
    /// A malformed or foreign hash verifies as `Ok(false)` rather than an
    /// error, so callers cannot distinguish it from a wrong password.
    fn verify(&self, hash: &str, password: &str) -> DomainResult<bool>;
}
