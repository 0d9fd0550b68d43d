use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No caller identity could be established (missing or invalid token,
    /// or the token subject no longer exists).
    #[error("Could not validate credentials")]
    CredentialsValidation,

    #[error("User[{user_id}] not authorized to access Transaction[{operation_code}]")]
    IllegalAccess {
        user_id: DbId,
        operation_code: String,
    },

    /// More than one Assignment→Role→Authorization path leads to the same
    /// operation code. Access is denied until the RBAC graph is cleaned up.
    #[error(
        "Found more than one authorization for User[{user_id}] and Transaction[{operation_code}]"
    )]
    AmbiguousAuthorization {
        user_id: DbId,
        operation_code: String,
    },

    #[error("Object {entity} was not accepted")]
    IntegrityValidation {
        entity: &'static str,
        detail: String,
    },

    #[error("{entity} with ID [{id}] not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Incorrect email or password")]
    IncorrectCredential,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
