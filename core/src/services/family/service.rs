//! Main family group service implementation

use std::sync::Arc;

use fh_shared::validation::validators;

use crate::domain::entities::family::NewFamily;
use crate::domain::value_objects::FamilyCreated;
use crate::errors::{DomainResult, FamilyError};
use crate::repositories::FamilyRepository;

/// Family group service: creation with founder binding and deletion
pub struct FamilyService<F>
where
    F: FamilyRepository,
{
    family_repository: Arc<F>,
}

impl<F> FamilyService<F>
where
    F: FamilyRepository,
{
    /// Create a new family group service
    pub fn new(family_repository: Arc<F>) -> Self {
        Self { family_repository }
    }

    /// Create a family and bind the founder as its main administrator
    ///
    /// The blank-name check here is a fast path; the repository enforces
    /// the same rule authoritatively.
    pub async fn create_family(&self, name: String, founder_id: u64) -> DomainResult<FamilyCreated> {
        if !validators::not_blank(&name) {
            return Err(FamilyError::EmptyName.into());
        }

        let id = self
            .family_repository
            .add_family(NewFamily::new(name.clone()), founder_id)
            .await?;

        tracing::info!(family_id = id, founder_id, "family created");
        Ok(FamilyCreated { id, name })
    }

    /// Delete a family by id; reports whether a row was removed
    pub async fn delete_family(&self, id: u64) -> DomainResult<bool> {
        let removed = self.family_repository.delete_family(id).await?;
        if !removed {
            tracing::warn!(family_id = id, "delete requested for unknown family");
        }
        Ok(removed)
    }
}
