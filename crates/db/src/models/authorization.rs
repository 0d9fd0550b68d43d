//! Authorization (role ↔ transaction) entity model.

use rbac_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, EntityInput, FieldValue, FilterColumn};
use crate::models::audit::AuditFields;

/// A row from the `authorizations` table. `(role_id, transaction_id)` is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Authorization {
    pub id: DbId,
    pub role_id: DbId,
    pub transaction_id: DbId,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizationInput {
    pub role_id: DbId,
    pub transaction_id: DbId,
}

impl EntityInput for AuthorizationInput {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("role_id", FieldValue::BigInt(self.role_id)),
            ("transaction_id", FieldValue::BigInt(self.transaction_id)),
        ]
    }
}

impl Entity for Authorization {
    type Input = AuthorizationInput;

    const NAME: &'static str = "Authorization";
    const TABLE: &'static str = "authorizations";
    const COLUMNS: &'static str = "id, role_id, transaction_id, \
        audit_user_login, audit_user_ip, audit_created_at, audit_updated_at";
    const FILTERS: &'static [FilterColumn] = &[
        FilterColumn::bigint("role_id"),
        FilterColumn::bigint("transaction_id"),
        FilterColumn::text("audit_user_login"),
    ];

    fn id(&self) -> DbId {
        self.id
    }
}
