//! Main authorization service implementation

use std::sync::Arc;

use crate::domain::entities::user::NewUser;
use crate::domain::value_objects::{EmailChange, RegisterUser, RegisteredUser};
use crate::errors::{DomainError, DomainResult, UserError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;
use crate::services::validation;

/// Authorization service orchestrating validation, hashing and the user store
///
/// Collaborators are injected by constructor; the service holds no state
/// of its own beyond them.
pub struct AuthService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    user_repository: Arc<U>,
    password_hasher: Arc<H>,
    token_service: Arc<TokenService>,
}

impl<U, H> AuthService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// Create a new authorization service
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<H>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
        }
    }

    /// Check a login attempt against the stored credentials
    ///
    /// An unknown email and a wrong password are both `Ok(false)`;
    /// callers cannot tell them apart.
    pub async fn check_credentials(&self, email: &str, password: &str) -> DomainResult<bool> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => return Ok(false),
        };

        self.password_hasher.verify(&user.password_hash, password)
    }

    /// Issue a signed token for the user holding `email`
    ///
    /// Callers are expected to have verified credentials first.
    pub async fn generate_token(&self, email: &str) -> DomainResult<String> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFoundByEmail {
                email: email.to_string(),
            })?;

        self.token_service.generate_token(&user)
    }

    /// Verify credentials and issue a signed token
    ///
    /// Returns `Ok(None)` on credential mismatch. The log line is
    /// deliberately generic: it names neither the email nor which check
    /// failed.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<Option<String>> {
        if !self.check_credentials(email, password).await? {
            tracing::warn!("login rejected: email or password are invalid");
            return Ok(None);
        }

        let token = self.generate_token(email).await?;
        Ok(Some(token))
    }

    /// Register a new user
    ///
    /// Validation runs before any store mutation; the password is hashed
    /// before it reaches the repository.
    pub async fn register(&self, request: RegisterUser) -> DomainResult<RegisteredUser> {
        validation::validate_registration(&request)?;

        let password_hash = self.password_hasher.hash(&request.password)?;
        let new_user = NewUser::new(
            request.email.clone(),
            password_hash,
            request.first_name,
            request.last_name,
            request.birth_date,
        );

        let id = match self.user_repository.add_user(new_user).await {
            Ok(id) => id,
            Err(err) => {
                if matches!(err, DomainError::User(UserError::EmailTaken)) {
                    tracing::warn!(
                        email = %request.email,
                        "registration rejected: email already registered"
                    );
                }
                return Err(err);
            }
        };

        tracing::info!(user_id = id, "user registered");
        Ok(RegisteredUser {
            id,
            email: request.email,
        })
    }

    /// Rewrite a user's email address
    pub async fn update_email(&self, change: EmailChange) -> DomainResult<()> {
        validation::validate_email_change(&change)?;
        self.user_repository
            .update_email(&change.old_email, &change.new_email)
            .await
    }
}
