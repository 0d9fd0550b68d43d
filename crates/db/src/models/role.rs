//! Role entity model.

use rbac_core::error::CoreError;
use rbac_core::types::DbId;
use rbac_core::validation::validate_required;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, EntityInput, FieldValue, FilterColumn};
use crate::models::audit::AuditFields;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditFields,
}

/// Mutable role columns, used for create and full-replace update.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleInput {
    pub name: String,
    pub description: String,
}

impl EntityInput for RoleInput {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("name", FieldValue::Text(self.name.clone())),
            ("description", FieldValue::Text(self.description.clone())),
        ]
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate_required("name", &self.name)
    }
}

impl Entity for Role {
    type Input = RoleInput;

    const NAME: &'static str = "Role";
    const TABLE: &'static str = "roles";
    const COLUMNS: &'static str = "id, name, description, \
        audit_user_login, audit_user_ip, audit_created_at, audit_updated_at";
    const FILTERS: &'static [FilterColumn] = &[
        FilterColumn::text("name"),
        FilterColumn::text("description"),
        FilterColumn::text("audit_user_login"),
    ];

    fn id(&self) -> DbId {
        self.id
    }
}
