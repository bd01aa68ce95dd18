//! Family repository trait defining the interface for family-group persistence.

use async_trait::async_trait;

use crate::domain::entities::family::{Family, FamilyRoleId, NewFamily};
use crate::errors::DomainResult;

/// Repository trait for Family entity persistence operations
///
/// Implementations own the family-name uniqueness invariant and the
/// atomicity of founder-role assignment: the family row and the founder's
/// membership row are persisted as a single all-or-nothing unit.
#[async_trait]
pub trait FamilyRepository: Send + Sync {
    /// Persist a new family and bind the founder to it with the
    /// "Main administrator" role, returning the store-assigned family id
    ///
    /// # Returns
    /// * `Ok(id)` - Family and founder membership persisted together
    /// * `Err(UserError::NotFoundById)` - No user holds `founder_id`
    /// * `Err(FamilyError::EmptyName)` - Family name is empty or blank
    /// * `Err(FamilyError::NameTaken)` - Another family already holds the name
    async fn add_family(&self, family: NewFamily, founder_id: u64) -> DomainResult<u64>;

    /// Remove a family by id; membership rows are removed with it
    ///
    /// # Returns
    /// * `Ok(true)` - A row existed and was removed
    /// * `Ok(false)` - No family holds that id
    async fn delete_family(&self, id: u64) -> DomainResult<bool>;

    /// Find a family by id
    async fn find_by_id(&self, id: u64) -> DomainResult<Option<Family>>;

    /// Role held by a user within a family, if any
    async fn member_role(
        &self,
        user_id: u64,
        family_id: u64,
    ) -> DomainResult<Option<FamilyRoleId>>;
}
