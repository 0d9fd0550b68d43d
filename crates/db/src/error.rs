//! Repository error type.

use rbac_core::error::CoreError;
use sqlx::error::ErrorKind;

/// Error returned by repositories that translate database failures into
/// domain errors.
///
/// Missing rows and constraint violations become [`CoreError`] variants;
/// anything else (connectivity, decoding) stays a raw [`sqlx::Error`].
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// PostgreSQL `string_data_right_truncation`.
const STRING_TOO_LONG: &str = "22001";

/// Map a write failure on `entity` to [`CoreError::IntegrityValidation`]
/// when it is a constraint violation, keeping the raw error otherwise.
pub fn classify_write_error(entity: &'static str, err: sqlx::Error) -> RepoError {
    if let sqlx::Error::Database(db_err) = &err {
        let is_integrity = matches!(
            db_err.kind(),
            ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
        ) || db_err.code().as_deref() == Some(STRING_TOO_LONG);

        if is_integrity {
            let constraint = db_err.constraint().unwrap_or("unknown");
            tracing::warn!(entity, constraint, error = %db_err, "Integrity violation");
            return RepoError::Core(CoreError::IntegrityValidation {
                entity,
                detail: db_err.message().to_string(),
            });
        }
    }
    RepoError::Database(err)
}
