//! Reference-data seeding.
//!
//! The family role catalogue is fixed data the rest of the system relies
//! on (founders are bound to role id 1). Seeding is idempotent and runs at
//! startup.

use sqlx::MySqlPool;

use fh_core::domain::entities::family::FamilyRole;
use fh_core::errors::{DomainError, DomainResult};

/// Ensure the three fixed family role rows exist
pub async fn seed_family_roles(pool: &MySqlPool) -> DomainResult<()> {
    for role in FamilyRole::seed_rows() {
        sqlx::query(
            "INSERT INTO family_roles (id, name) VALUES (?, ?) \
             ON DUPLICATE KEY UPDATE name = VALUES(name)",
        )
        .bind(role.id)
        .bind(&role.name)
        .execute(pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to seed family role {}: {}", role.id, e),
        })?;
    }

    tracing::info!("family role reference data seeded");
    Ok(())
}
