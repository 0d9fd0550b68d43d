//! Generic CRUD repository driven by [`Entity`] metadata.

use std::marker::PhantomData;

use rbac_core::error::CoreError;
use rbac_core::pagination::Page;
use rbac_core::types::DbId;
use sqlx::query_builder::Separated;
use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};

use crate::entity::{Entity, EntityInput, FieldKind, FieldValue};
use crate::error::{classify_write_error, RepoError};
use crate::models::audit::AuditStamp;

/// A list filter as received from the caller: column name and raw value.
pub type Filter = (String, String);

/// CRUD operations for any entity `E`.
///
/// Writes touch exactly one row of `E::TABLE`. Constraint violations come
/// back as [`CoreError::IntegrityValidation`], missing rows as
/// [`CoreError::NotFound`].
pub struct CrudRepo<E>(PhantomData<E>);

impl<E: Entity> CrudRepo<E> {
    /// Find a row by id, or `None`.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<E>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} WHERE id = $1", E::COLUMNS, E::TABLE);
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a row by id, failing with `NotFound` when it does not exist.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<E, RepoError> {
        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found::<E>(id))
    }

    /// List one page of rows ordered by id.
    ///
    /// Text filters match as case-insensitive substrings, integer filters by
    /// equality. Unknown columns and unparseable integers are rejected.
    pub async fn get_all(
        pool: &PgPool,
        page: Page,
        filters: &[Filter],
    ) -> Result<Vec<E>, RepoError> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM {}",
            E::COLUMNS,
            E::TABLE
        ));

        for (i, (key, raw)) in filters.iter().enumerate() {
            let column = E::filter_column(key).ok_or_else(|| {
                CoreError::Validation(format!("Unknown filter '{key}' for {}", E::NAME))
            })?;

            qb.push(if i == 0 { " WHERE " } else { " AND " });
            qb.push(column.name);
            match column.kind {
                FieldKind::Text => {
                    qb.push(" ILIKE ")
                        .push_bind(format!("%{}%", escape_like(raw)));
                }
                FieldKind::BigInt => {
                    let value: DbId = raw.parse().map_err(|_| {
                        CoreError::Validation(format!("Filter '{key}' must be an integer"))
                    })?;
                    qb.push(" = ").push_bind(value);
                }
            }
        }

        qb.push(" ORDER BY id ASC LIMIT ")
            .push_bind(page.limit)
            .push(" OFFSET ")
            .push_bind(page.skip);

        let rows = qb.build_query_as::<E>().fetch_all(pool).await?;
        Ok(rows)
    }

    /// Insert a new row, returning it with its generated id and timestamps.
    ///
    /// Accepts a pool or an open transaction (`&mut *tx`).
    pub async fn save<'e>(
        executor: impl PgExecutor<'e>,
        input: &E::Input,
        audit: &AuditStamp,
    ) -> Result<E, RepoError> {
        input.validate()?;
        let fields = input.fields();

        let mut qb = QueryBuilder::<Postgres>::new(format!("INSERT INTO {} (", E::TABLE));
        let mut columns = qb.separated(", ");
        for (name, _) in &fields {
            columns.push(*name);
        }
        columns.push("audit_user_login");
        columns.push("audit_user_ip");

        qb.push(") VALUES (");
        let mut values = qb.separated(", ");
        for (_, value) in fields {
            push_value(&mut values, value);
        }
        values.push_bind(audit.login.clone());
        values.push_bind(audit.ip.clone());
        qb.push(format!(") RETURNING {}", E::COLUMNS));

        qb.build_query_as::<E>()
            .fetch_one(executor)
            .await
            .map_err(|e| classify_write_error(E::NAME, e))
    }

    /// Replace every mutable column of row `id` with `input`.
    ///
    /// Refreshes the audit login/IP and `audit_updated_at`; `id` and
    /// `audit_created_at` are never written.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &E::Input,
        audit: &AuditStamp,
    ) -> Result<E, RepoError> {
        input.validate()?;

        let mut qb = QueryBuilder::<Postgres>::new(format!("UPDATE {} SET ", E::TABLE));
        let mut assignments = qb.separated(", ");
        for (name, value) in input.fields() {
            assignments.push(format!("{name} = "));
            push_value_unseparated(&mut assignments, value);
        }
        assignments.push("audit_user_login = ");
        assignments.push_bind_unseparated(audit.login.clone());
        assignments.push("audit_user_ip = ");
        assignments.push_bind_unseparated(audit.ip.clone());
        assignments.push("audit_updated_at = NOW()");

        qb.push(" WHERE id = ")
            .push_bind(id)
            .push(format!(" RETURNING {}", E::COLUMNS));

        qb.build_query_as::<E>()
            .fetch_optional(pool)
            .await
            .map_err(|e| classify_write_error(E::NAME, e))?
            .ok_or_else(|| not_found::<E>(id))
    }

    /// Hard-delete row `id`. Rows still referenced by a foreign key are
    /// rejected with `IntegrityValidation`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), RepoError> {
        let query = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
        let result = sqlx::query(&query)
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| classify_write_error(E::NAME, e))?;

        if result.rows_affected() == 0 {
            return Err(not_found::<E>(id));
        }
        Ok(())
    }
}

fn not_found<E: Entity>(id: DbId) -> RepoError {
    RepoError::Core(CoreError::NotFound {
        entity: E::NAME,
        id,
    })
}

fn push_value(sep: &mut Separated<'_, '_, Postgres, &'static str>, value: FieldValue) {
    match value {
        FieldValue::Text(v) => {
            sep.push_bind(v);
        }
        FieldValue::BigInt(v) => {
            sep.push_bind(v);
        }
    }
}

fn push_value_unseparated(sep: &mut Separated<'_, '_, Postgres, &'static str>, value: FieldValue) {
    match value {
        FieldValue::Text(v) => {
            sep.push_bind_unseparated(v);
        }
        FieldValue::BigInt(v) => {
            sep.push_bind_unseparated(v);
        }
    }
}

/// Escape `LIKE` metacharacters so filter values match literally.
fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
