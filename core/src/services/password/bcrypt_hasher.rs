//! Bcrypt-backed implementation of the password hashing capability.

use crate::errors::{DomainResult, PasswordError};

use super::traits::PasswordHasher;

/// Password hasher delegating to the bcrypt crate
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with the bcrypt default cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost; tests use a low cost to
    /// keep hashing fast
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| {
            tracing::error!("password hashing failed: {}", e);
            PasswordError::HashingFailed.into()
        })
    }

    fn verify(&self, hash: &str, password: &str) -> DomainResult<bool> {
        match bcrypt::verify(password, hash) {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::debug!("hash verification errored, treating as mismatch: {}", e);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> BcryptHasher {
        BcryptHasher::with_cost(4)
    }

    #[test]
    fn hash_then_verify_round_trips() {
        let hasher = hasher();
        let hash = hasher.hash("zaq1@WSX").unwrap();

        assert_ne!(hash, "zaq1@WSX");
        assert!(hasher.verify(&hash, "zaq1@WSX").unwrap());
    }

    #[test]
    fn verify_rejects_different_password() {
        let hasher = hasher();
        let hash = hasher.hash("zaq1@WSX").unwrap();

        assert!(!hasher.verify(&hash, "zaq1@wsx").unwrap());
        assert!(!hasher.verify(&hash, "").unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = hasher();
        let first = hasher.hash("zaq1@WSX").unwrap();
        let second = hasher.hash("zaq1@WSX").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn malformed_hash_verifies_as_mismatch() {
        let hasher = hasher();

        assert!(!hasher.verify("not-a-bcrypt-hash", "zaq1@WSX").unwrap());
    }
}
