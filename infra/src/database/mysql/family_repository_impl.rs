//! MySQL implementation of the FamilyRepository trait.
//!
//! Family creation writes the family row and the founder's membership row
//! inside one transaction, so a crash between the two writes cannot leave
//! a family without an administrator.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use fh_core::domain::entities::family::{Family, FamilyRoleId, NewFamily};
use fh_core::errors::{DomainError, DomainResult, FamilyError, UserError};
use fh_core::repositories::FamilyRepository;
use fh_shared::validation::validators;

use super::{db_err, is_unique_violation, query_err};

/// MySQL implementation of FamilyRepository
pub struct MySqlFamilyRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlFamilyRepository {
    /// Create a new MySQL family repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn founder_exists(&self, founder_id: u64) -> DomainResult<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?) AS present")
            .bind(founder_id)
            .fetch_one(&self.pool)
            .await
            .map_err(query_err)?;

        let present: i64 = row.try_get("present").map_err(db_err("present"))?;
        Ok(present == 1)
    }

    async fn name_exists(&self, name: &str) -> DomainResult<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM families WHERE name = ?) AS present")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(query_err)?;

        let present: i64 = row.try_get("present").map_err(db_err("present"))?;
        Ok(present == 1)
    }
}

#[async_trait]
impl FamilyRepository for MySqlFamilyRepository {
    async fn add_family(&self, family: NewFamily, founder_id: u64) -> DomainResult<u64> {
        if !self.founder_exists(founder_id).await? {
            return Err(UserError::NotFoundById { id: founder_id }.into());
        }
        if !validators::not_blank(&family.name) {
            return Err(FamilyError::EmptyName.into());
        }
        if self.name_exists(&family.name).await? {
            return Err(FamilyError::NameTaken { name: family.name }.into());
        }

        let mut tx = self.pool.begin().await.map_err(query_err)?;

        let result = sqlx::query("INSERT INTO families (name) VALUES (?)")
            .bind(&family.name)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                // lost a race against a concurrent creation with the same name
                if is_unique_violation(&e) {
                    FamilyError::NameTaken {
                        name: family.name.clone(),
                    }
                    .into()
                } else {
                    query_err(e)
                }
            })?;
        let family_id = result.last_insert_id();

        sqlx::query("INSERT INTO user_family_roles (user_id, family_id, role_id) VALUES (?, ?, ?)")
            .bind(founder_id)
            .bind(family_id)
            .bind(FamilyRoleId::MainAdministrator.as_u64())
            .execute(&mut *tx)
            .await
            .map_err(query_err)?;

        tx.commit().await.map_err(query_err)?;

        tracing::debug!(family_id, founder_id, "family and founder role persisted");
        Ok(family_id)
    }

    async fn delete_family(&self, id: u64) -> DomainResult<bool> {
        // membership rows cascade with the family row
        let result = sqlx::query("DELETE FROM families WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: u64) -> DomainResult<Option<Family>> {
        let result = sqlx::query("SELECT id, name FROM families WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_err)?;

        match result {
            Some(row) => Ok(Some(Family {
                id: row.try_get("id").map_err(db_err("id"))?,
                name: row.try_get("name").map_err(db_err("name"))?,
            })),
            None => Ok(None),
        }
    }

    async fn member_role(
        &self,
        user_id: u64,
        family_id: u64,
    ) -> DomainResult<Option<FamilyRoleId>> {
        let query = r#"
            SELECT role_id
            FROM user_family_roles
            WHERE user_id = ? AND family_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .bind(family_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_err)?;

        match result {
            Some(row) => {
                let role_id: u64 = row.try_get("role_id").map_err(db_err("role_id"))?;
                let role = FamilyRoleId::from_u64(role_id).ok_or(DomainError::Database {
                    message: format!("Unknown family role id: {}", role_id),
                })?;
                Ok(Some(role))
            }
            None => Ok(None),
        }
    }
}
