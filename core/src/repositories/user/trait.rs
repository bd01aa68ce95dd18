//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and reports every outcome through
//! `DomainResult`; absence on lookups is `Ok(None)`, never an error.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User, UserProfileUpdate};
use crate::errors::DomainResult;

/// Repository trait for User entity persistence operations
///
/// Implementations own the email-uniqueness invariant: no two persisted
/// users may share an email address (byte-exact comparison). Every
/// mutating operation persists immediately.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return the store-assigned id
    ///
    /// # Returns
    /// * `Ok(id)` - User persisted
    /// * `Err(UserError::EmptyEmail)` - Email is empty or blank
    /// * `Err(UserError::EmailTaken)` - Another user already holds the email
    async fn add_user(&self, user: NewUser) -> DomainResult<u64>;

    /// Find a user by exact email match
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Find a user by id
    async fn find_by_id(&self, id: u64) -> DomainResult<Option<User>>;

    /// Overwrite the mutable profile fields of the user keyed by
    /// `update.email`, preserving id, email and password hash
    ///
    /// # Returns
    /// * `Err(UserError::NotFoundByEmail)` - No user holds that email
    async fn update_profile(&self, update: UserProfileUpdate) -> DomainResult<()>;

    /// Rewrite a user's email address in place
    ///
    /// # Returns
    /// * `Err(UserError::SameEmail)` - Old and new address are equal
    /// * `Err(UserError::NotFoundByEmail)` - No user holds `old_email`
    /// * `Err(UserError::EmailTaken)` - Another user already holds `new_email`
    async fn update_email(&self, old_email: &str, new_email: &str) -> DomainResult<()>;

    /// Overwrite the password hash of the user keyed by email
    ///
    /// # Returns
    /// * `Err(UserError::NotFoundByEmail)` - No user holds that email
    async fn update_password(&self, email: &str, new_password_hash: &str) -> DomainResult<()>;
}
