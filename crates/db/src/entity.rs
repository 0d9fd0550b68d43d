//! Entity metadata consumed by the generic [`CrudRepo`].
//!
//! Each model describes its table, selected columns, filterable columns and
//! the shape of its mutable input. The repository builds every statement
//! from this metadata, so adding a resource means implementing [`Entity`]
//! and [`EntityInput`] and nothing else.
//!
//! [`CrudRepo`]: crate::repositories::CrudRepo

use rbac_core::error::CoreError;
use rbac_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// How a filter value is matched against its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Case-insensitive substring match (`ILIKE '%value%'`).
    Text,
    /// Exact match on a `BIGINT` column.
    BigInt,
}

/// A column a list request may filter on.
#[derive(Debug, Clone, Copy)]
pub struct FilterColumn {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FilterColumn {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn bigint(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::BigInt,
        }
    }
}

/// A value bound into an `INSERT` or `UPDATE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    BigInt(DbId),
}

/// The mutable (non-id, non-audit) columns of an entity.
pub trait EntityInput: Send + Sync {
    /// Column/value pairs in the order they are written.
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;

    /// Reject payloads that could never be stored correctly.
    fn validate(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// A persisted row type with an `id BIGSERIAL` primary key and audit columns.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    type Input: EntityInput;

    /// Human-readable name used in error messages (e.g. `"Role"`).
    const NAME: &'static str;
    const TABLE: &'static str;
    /// Column list for `SELECT` and `RETURNING` clauses.
    const COLUMNS: &'static str;
    const FILTERS: &'static [FilterColumn];

    fn id(&self) -> DbId;

    /// Look up a filterable column by name.
    fn filter_column(name: &str) -> Option<&'static FilterColumn> {
        Self::FILTERS.iter().find(|c| c.name == name)
    }
}
