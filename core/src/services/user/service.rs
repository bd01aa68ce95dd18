//! Main user account service implementation

use std::sync::Arc;

use crate::domain::entities::user::UserProfileUpdate;
use crate::domain::value_objects::{EmailChange, PasswordChange, UserView};
use crate::errors::{DomainResult, PasswordError, UserError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::validation;

/// User account service for mutations on existing accounts
pub struct UserService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    user_repository: Arc<U>,
    password_hasher: Arc<H>,
}

impl<U, H> UserService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// Create a new user account service
    pub fn new(user_repository: Arc<U>, password_hasher: Arc<H>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Overwrite the mutable profile fields of an existing user
    pub async fn update_profile(&self, update: UserProfileUpdate) -> DomainResult<()> {
        validation::validate_profile_update(&update)?;
        self.user_repository.update_profile(update).await
    }

    /// Rewrite a user's email address
    pub async fn update_email(&self, change: EmailChange) -> DomainResult<()> {
        validation::validate_email_change(&change)?;
        self.user_repository
            .update_email(&change.old_email, &change.new_email)
            .await
    }

    /// Replace a user's password
    ///
    /// The new password must satisfy the complexity policy and differ
    /// from the current one; the comparison happens against the stored
    /// hash, the store never sees plaintext.
    pub async fn update_password(&self, change: PasswordChange) -> DomainResult<()> {
        validation::validate_password_change(&change)?;

        let user = self
            .user_repository
            .find_by_email(&change.email)
            .await?
            .ok_or(UserError::NotFoundByEmail {
                email: change.email.clone(),
            })?;

        if self
            .password_hasher
            .verify(&user.password_hash, &change.new_password)?
        {
            return Err(PasswordError::SameAsCurrent.into());
        }

        let new_hash = self.password_hasher.hash(&change.new_password)?;
        self.user_repository
            .update_password(&change.email, &new_hash)
            .await
    }

    /// Look up a user projection by email
    pub async fn get_by_email(&self, email: &str) -> DomainResult<Option<UserView>> {
        Ok(self
            .user_repository
            .find_by_email(email)
            .await?
            .map(UserView::from))
    }
}
