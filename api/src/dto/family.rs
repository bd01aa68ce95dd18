//! Family DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use fh_core::domain::value_objects::FamilyCreated;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFamilyRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub founder_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyResponse {
    pub id: u64,
    pub name: String,
}

impl From<FamilyCreated> for FamilyResponse {
    fn from(created: FamilyCreated) -> Self {
        Self {
            id: created.id,
            name: created.name,
        }
    }
}
