//! Assignment (user ↔ role) entity model.

use rbac_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, EntityInput, FieldValue, FilterColumn};
use crate::models::audit::AuditFields;

/// A row from the `assignments` table: `role_id` granted to `user_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub user_id: DbId,
    pub role_id: DbId,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentInput {
    pub user_id: DbId,
    pub role_id: DbId,
}

impl EntityInput for AssignmentInput {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("user_id", FieldValue::BigInt(self.user_id)),
            ("role_id", FieldValue::BigInt(self.role_id)),
        ]
    }
}

impl Entity for Assignment {
    type Input = AssignmentInput;

    const NAME: &'static str = "Assignment";
    const TABLE: &'static str = "assignments";
    const COLUMNS: &'static str = "id, user_id, role_id, \
        audit_user_login, audit_user_ip, audit_created_at, audit_updated_at";
    const FILTERS: &'static [FilterColumn] = &[
        FilterColumn::bigint("user_id"),
        FilterColumn::bigint("role_id"),
        FilterColumn::text("audit_user_login"),
    ];

    fn id(&self) -> DbId {
        self.id
    }
}
