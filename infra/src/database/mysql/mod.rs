//! MySQL repository implementations.

mod family_repository_impl;
mod user_repository_impl;

pub use family_repository_impl::MySqlFamilyRepository;
pub use user_repository_impl::MySqlUserRepository;

/// Whether a SQLx error is a unique-constraint violation
///
/// MySQL reports duplicate keys with SQLSTATE 23000. The repositories
/// pre-check uniqueness for specific error messages, but the constraint
/// remains the authoritative guard when two writers race; this translation
/// keeps the surfaced error a conflict either way.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23000")
    )
}

/// Wrap a failed query into the database error variant
pub(crate) fn query_err(e: sqlx::Error) -> fh_core::errors::DomainError {
    fh_core::errors::DomainError::Database {
        message: format!("Database query failed: {}", e),
    }
}

/// Wrap a column decode failure into the database error variant
pub(crate) fn db_err(column: &'static str) -> impl FnOnce(sqlx::Error) -> fh_core::errors::DomainError {
    move |e| fh_core::errors::DomainError::Database {
        message: format!("Failed to read column {}: {}", column, e),
    }
}
