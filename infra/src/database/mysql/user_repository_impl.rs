//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};

use fh_core::domain::entities::user::{NewUser, User, UserProfileUpdate};
use fh_core::errors::{DomainResult, UserError};
use fh_core::repositories::UserRepository;
use fh_shared::validation::validators;

use super::{db_err, is_unique_violation, query_err};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> DomainResult<User> {
        Ok(User {
            id: row.try_get("id").map_err(db_err("id"))?,
            email: row.try_get("email").map_err(db_err("email"))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(db_err("password_hash"))?,
            first_name: row.try_get("first_name").map_err(db_err("first_name"))?,
            last_name: row.try_get("last_name").map_err(db_err("last_name"))?,
            birth_date: row
                .try_get::<NaiveDate, _>("birth_date")
                .map_err(db_err("birth_date"))?,
            registered_at: row
                .try_get::<DateTime<Utc>, _>("registered_at")
                .map_err(db_err("registered_at"))?,
        })
    }

    async fn email_exists(&self, email: &str) -> DomainResult<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS present")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(query_err)?;

        let present: i64 = row.try_get("present").map_err(db_err("present"))?;
        Ok(present == 1)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn add_user(&self, user: NewUser) -> DomainResult<u64> {
        if !validators::not_blank(&user.email) {
            return Err(UserError::EmptyEmail.into());
        }
        if self.email_exists(&user.email).await? {
            return Err(UserError::EmailTaken.into());
        }

        let query = r#"
            INSERT INTO users (email, password_hash, first_name, last_name, birth_date, registered_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.birth_date)
            .bind(user.registered_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // lost a race against a concurrent registration
                if is_unique_violation(&e) {
                    UserError::EmailTaken.into()
                } else {
                    query_err(e)
                }
            })?;

        Ok(result.last_insert_id())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let query = r#"
            SELECT id, email, password_hash, first_name, last_name, birth_date, registered_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: u64) -> DomainResult<Option<User>> {
        let query = r#"
            SELECT id, email, password_hash, first_name, last_name, birth_date, registered_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn update_profile(&self, update: UserProfileUpdate) -> DomainResult<()> {
        if !self.email_exists(&update.email).await? {
            return Err(UserError::NotFoundByEmail {
                email: update.email,
            }
            .into());
        }

        let query = r#"
            UPDATE users
            SET first_name = ?, last_name = ?, birth_date = ?
            WHERE email = ?
        "#;

        sqlx::query(query)
            .bind(&update.first_name)
            .bind(&update.last_name)
            .bind(update.birth_date)
            .bind(&update.email)
            .execute(&self.pool)
            .await
            .map_err(query_err)?;

        Ok(())
    }

    async fn update_email(&self, old_email: &str, new_email: &str) -> DomainResult<()> {
        if old_email == new_email {
            return Err(UserError::SameEmail.into());
        }
        if !self.email_exists(old_email).await? {
            return Err(UserError::NotFoundByEmail {
                email: old_email.to_string(),
            }
            .into());
        }
        if self.email_exists(new_email).await? {
            return Err(UserError::EmailTaken.into());
        }

        sqlx::query("UPDATE users SET email = ? WHERE email = ?")
            .bind(new_email)
            .bind(old_email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    UserError::EmailTaken.into()
                } else {
                    query_err(e)
                }
            })?;

        Ok(())
    }

    async fn update_password(&self, email: &str, new_password_hash: &str) -> DomainResult<()> {
        if !self.email_exists(email).await? {
            return Err(UserError::NotFoundByEmail {
                email: email.to_string(),
            }
            .into());
        }

        sqlx::query("UPDATE users SET password_hash = ? WHERE email = ?")
            .bind(new_password_hash)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(query_err)?;

        Ok(())
    }
}
