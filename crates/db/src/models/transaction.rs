//! Transaction (permissible operation) entity model.

use rbac_core::error::CoreError;
use rbac_core::types::DbId;
use rbac_core::validation::{validate_operation_code, validate_required};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, EntityInput, FieldValue, FilterColumn};
use crate::models::audit::AuditFields;

/// A row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub operation_code: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInput {
    pub name: String,
    pub description: String,
    pub operation_code: String,
}

impl EntityInput for TransactionInput {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("name", FieldValue::Text(self.name.clone())),
            ("description", FieldValue::Text(self.description.clone())),
            ("operation_code", FieldValue::Text(self.operation_code.clone())),
        ]
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate_required("name", &self.name)?;
        validate_operation_code(&self.operation_code)
    }
}

impl Entity for Transaction {
    type Input = TransactionInput;

    const NAME: &'static str = "Transaction";
    const TABLE: &'static str = "transactions";
    const COLUMNS: &'static str = "id, name, description, operation_code, \
        audit_user_login, audit_user_ip, audit_created_at, audit_updated_at";
    const FILTERS: &'static [FilterColumn] = &[
        FilterColumn::text("name"),
        FilterColumn::text("description"),
        FilterColumn::text("operation_code"),
        FilterColumn::text("audit_user_login"),
    ];

    fn id(&self) -> DbId {
        self.id
    }
}
