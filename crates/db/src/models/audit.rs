//! Audit columns shared by every table.

use rbac_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// Audit trail embedded in every entity via `#[sqlx(flatten)]`.
///
/// The timestamps are assigned by the database; only the login and IP come
/// from the caller (see [`AuditStamp`]).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditFields {
    pub audit_user_login: String,
    pub audit_user_ip: String,
    pub audit_created_at: Timestamp,
    pub audit_updated_at: Timestamp,
}

/// Who performed a write, and from where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    pub login: String,
    pub ip: String,
}

impl AuditStamp {
    pub fn new(login: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            ip: ip.into(),
        }
    }

    /// Stamp used for rows written by the server itself (seed, bootstrap).
    pub fn system() -> Self {
        Self::new("system", "127.0.0.1")
    }
}
