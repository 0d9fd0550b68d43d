//! User entity model and DTOs.

use rbac_core::error::CoreError;
use rbac_core::types::DbId;
use rbac_core::validation::{validate_email, validate_max_len, validate_required};
use serde::Serialize;
use sqlx::FromRow;

use crate::entity::{Entity, EntityInput, FieldValue, FilterColumn};
use crate::models::audit::AuditFields;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    #[sqlx(flatten)]
    pub audit: AuditFields,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub display_name: String,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            audit: user.audit,
        }
    }
}

/// Usernames are copied into `audit_user_login`, so they share its bound.
pub const MAX_USERNAME_LEN: usize = 150;

/// Mutable user columns. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
}

impl EntityInput for UserInput {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("username", FieldValue::Text(self.username.clone())),
            ("email", FieldValue::Text(self.email.clone())),
            ("password_hash", FieldValue::Text(self.password_hash.clone())),
            ("display_name", FieldValue::Text(self.display_name.clone())),
        ]
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate_required("username", &self.username)?;
        validate_max_len("username", &self.username, MAX_USERNAME_LEN)?;
        validate_required("display_name", &self.display_name)?;
        validate_email(&self.email)
    }
}

impl Entity for User {
    type Input = UserInput;

    const NAME: &'static str = "User";
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, username, email, password_hash, display_name, \
        audit_user_login, audit_user_ip, audit_created_at, audit_updated_at";
    // password_hash is never filterable.
    const FILTERS: &'static [FilterColumn] = &[
        FilterColumn::text("username"),
        FilterColumn::text("email"),
        FilterColumn::text("display_name"),
        FilterColumn::text("audit_user_login"),
    ];

    fn id(&self) -> DbId {
        self.id
    }
}
