//! In-memory implementation of FamilyRepository for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use fh_shared::validation::validators;

use crate::domain::entities::family::{Family, FamilyRoleId, NewFamily, UserFamilyRole};
use crate::errors::{DomainResult, FamilyError, UserError};
use crate::repositories::user::{MockUserRepository, UserRepository};

use super::trait_::FamilyRepository;

#[derive(Default)]
struct State {
    families: HashMap<u64, Family>,
    memberships: Vec<UserFamilyRole>,
    next_id: u64,
}

/// Mock family repository backed by a HashMap
///
/// Shares a user repository so founder lookups observe the same user set
/// the rest of the test works against. Family and membership rows are
/// written under one lock, mirroring the transactional MySQL
/// implementation.
pub struct MockFamilyRepository {
    state: Arc<RwLock<State>>,
    users: Arc<MockUserRepository>,
}

impl MockFamilyRepository {
    /// Create a mock repository over an existing user set
    pub fn new(users: Arc<MockUserRepository>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                families: HashMap::new(),
                memberships: Vec::new(),
                next_id: 1,
            })),
            users,
        }
    }

    /// Number of persisted families, for row-count assertions in tests
    pub async fn family_count(&self) -> usize {
        self.state.read().await.families.len()
    }

    /// Number of persisted membership rows
    pub async fn membership_count(&self) -> usize {
        self.state.read().await.memberships.len()
    }
}

#[async_trait]
impl FamilyRepository for MockFamilyRepository {
    async fn add_family(&self, family: NewFamily, founder_id: u64) -> DomainResult<u64> {
        let founder = self.users.find_by_id(founder_id).await?;

        let mut state = self.state.write().await;

        if founder.is_none() {
            return Err(UserError::NotFoundById { id: founder_id }.into());
        }
        if !validators::not_blank(&family.name) {
            return Err(FamilyError::EmptyName.into());
        }
        if state.families.values().any(|f| f.name == family.name) {
            return Err(FamilyError::NameTaken { name: family.name }.into());
        }

        let id = state.next_id;
        state.next_id += 1;
        state.families.insert(
            id,
            Family {
                id,
                name: family.name,
            },
        );
        state.memberships.push(UserFamilyRole {
            user_id: founder_id,
            family_id: id,
            role: FamilyRoleId::MainAdministrator,
        });
        Ok(id)
    }

    async fn delete_family(&self, id: u64) -> DomainResult<bool> {
        let mut state = self.state.write().await;
        let removed = state.families.remove(&id).is_some();
        if removed {
            state.memberships.retain(|m| m.family_id != id);
        }
        Ok(removed)
    }

    async fn find_by_id(&self, id: u64) -> DomainResult<Option<Family>> {
        let state = self.state.read().await;
        Ok(state.families.get(&id).cloned())
    }

    async fn member_role(
        &self,
        user_id: u64,
        family_id: u64,
    ) -> DomainResult<Option<FamilyRoleId>> {
        let state = self.state.read().await;
        Ok(state
            .memberships
            .iter()
            .find(|m| m.user_id == user_id && m.family_id == family_id)
            .map(|m| m.role))
    }
}
