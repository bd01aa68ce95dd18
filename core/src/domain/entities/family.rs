//! Family group entities and the fixed role catalogue.

use serde::{Deserialize, Serialize};

/// A named family group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Unique identifier, assigned by the store
    pub id: u64,

    /// Family name, unique across all families
    pub name: String,
}

/// Payload for creating a family; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFamily {
    pub name: String,
}

impl NewFamily {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Fixed role identifiers seeded at schema creation
///
/// The numeric values are stable reference data; role id 1 is assigned to
/// a family's founder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyRoleId {
    MainAdministrator,
    Parent,
    Child,
}

impl FamilyRoleId {
    /// Numeric id of the role row
    pub fn as_u64(self) -> u64 {
        match self {
            FamilyRoleId::MainAdministrator => 1,
            FamilyRoleId::Parent => 2,
            FamilyRoleId::Child => 3,
        }
    }

    /// Resolve a stored numeric id back to a role
    pub fn from_u64(id: u64) -> Option<Self> {
        match id {
            1 => Some(FamilyRoleId::MainAdministrator),
            2 => Some(FamilyRoleId::Parent),
            3 => Some(FamilyRoleId::Child),
            _ => None,
        }
    }

    /// Human-readable role name as seeded
    pub fn name(self) -> &'static str {
        match self {
            FamilyRoleId::MainAdministrator => "Main administrator",
            FamilyRoleId::Parent => "Parent",
            FamilyRoleId::Child => "Child",
        }
    }
}

/// Role lookup row, immutable reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyRole {
    pub id: u64,
    pub name: String,
}

impl FamilyRole {
    /// The three fixed rows seeded into the role table
    pub fn seed_rows() -> [FamilyRole; 3] {
        [
            FamilyRoleId::MainAdministrator,
            FamilyRoleId::Parent,
            FamilyRoleId::Child,
        ]
        .map(|role| FamilyRole {
            id: role.as_u64(),
            name: role.name().to_string(),
        })
    }
}

/// Join row binding one user to one family with one role
///
/// A user holds at most one role per family; identity is the
/// (user, family) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFamilyRole {
    pub user_id: u64,
    pub family_id: u64,
    pub role: FamilyRoleId,
}
