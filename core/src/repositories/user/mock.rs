//! In-memory implementation of UserRepository for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use fh_shared::validation::validators;

use crate::domain::entities::user::{NewUser, User, UserProfileUpdate};
use crate::errors::{DomainResult, UserError};

use super::trait_::UserRepository;

#[derive(Default)]
struct State {
    users: HashMap<u64, User>,
    next_id: u64,
}

/// Mock user repository backed by a HashMap
///
/// Mirrors the uniqueness semantics of the MySQL implementation,
/// including id assignment.
pub struct MockUserRepository {
    state: Arc<RwLock<State>>,
}

impl MockUserRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                users: HashMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Number of persisted users, for row-count assertions in tests
    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn add_user(&self, user: NewUser) -> DomainResult<u64> {
        let mut state = self.state.write().await;

        if !validators::not_blank(&user.email) {
            return Err(UserError::EmptyEmail.into());
        }
        if state.users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailTaken.into());
        }

        let id = state.next_id;
        state.next_id += 1;
        state.users.insert(id, user.into_user(id));
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: u64) -> DomainResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn update_profile(&self, update: UserProfileUpdate) -> DomainResult<()> {
        let mut state = self.state.write().await;

        let user = state
            .users
            .values_mut()
            .find(|u| u.email == update.email)
            .ok_or(UserError::NotFoundByEmail {
                email: update.email.clone(),
            })?;

        user.first_name = update.first_name;
        user.last_name = update.last_name;
        user.birth_date = update.birth_date;
        Ok(())
    }

    async fn update_email(&self, old_email: &str, new_email: &str) -> DomainResult<()> {
        let mut state = self.state.write().await;

        if old_email == new_email {
            return Err(UserError::SameEmail.into());
        }
        if !state.users.values().any(|u| u.email == old_email) {
            return Err(UserError::NotFoundByEmail {
                email: old_email.to_string(),
            }
            .into());
        }
        if state.users.values().any(|u| u.email == new_email) {
            return Err(UserError::EmailTaken.into());
        }

        if let Some(user) = state.users.values_mut().find(|u| u.email == old_email) {
            user.email = new_email.to_string();
        }
        Ok(())
    }

    async fn update_password(&self, email: &str, new_password_hash: &str) -> DomainResult<()> {
        let mut state = self.state.write().await;

        let user = state
            .users
            .values_mut()
            .find(|u| u.email == email)
            .ok_or(UserError::NotFoundByEmail {
                email: email.to_string(),
            })?;

        user.password_hash = new_password_hash.to_string();
        Ok(())
    }
}
