//! Operation-code authorization.
//!
//! Every guarded endpoint names its operation code at the type level through
//! a marker implementing [`Operation`]. [`RequireOperation`] resolves the
//! caller and runs [`validate_transaction_access`] before the handler body.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use rbac_core::access::evaluate_grants;
use rbac_core::error::CoreError;
use rbac_core::operations;
use rbac_db::models::user::User;
use rbac_db::repositories::AccessRepo;
use sqlx::PgPool;

use super::auth::{resolve_caller, AuthUser};
use crate::error::AppError;
use crate::state::AppState;

/// A guarded operation, identified by its code in the `transactions` table.
pub trait Operation: Send + Sync + 'static {
    const CODE: &'static str;
}

macro_rules! operations {
    ($($name:ident => $code:expr),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl Operation for $name {
                const CODE: &'static str = $code;
            }
        )*
    };
}

operations! {
    CreateAssignment => operations::assignment::CREATE,
    UpdateAssignment => operations::assignment::UPDATE,
    ListAssignments => operations::assignment::LIST,
    DeleteAssignment => operations::assignment::DELETE,
    GetAssignment => operations::assignment::GET,

    CreateAuthorization => operations::authorization::CREATE,
    UpdateAuthorization => operations::authorization::UPDATE,
    ListAuthorizations => operations::authorization::LIST,
    DeleteAuthorization => operations::authorization::DELETE,
    GetAuthorization => operations::authorization::GET,

    CreateTransaction => operations::transaction::CREATE,
    UpdateTransaction => operations::transaction::UPDATE,
    ListTransactions => operations::transaction::LIST,
    DeleteTransaction => operations::transaction::DELETE,
    GetTransaction => operations::transaction::GET,

    CreateUser => operations::user::CREATE,
    UpdateUser => operations::user::UPDATE,
    ListUsers => operations::user::LIST,
    DeleteUser => operations::user::DELETE,
    GetUser => operations::user::GET,
    ListUserTransactions => operations::user::LIST_TRANSACTIONS,

    CreateRole => operations::role::CREATE,
    UpdateRole => operations::role::UPDATE,
    ListRoles => operations::role::LIST,
    DeleteRole => operations::role::DELETE,
    GetRole => operations::role::GET,
}

/// Check that `user` may run `operation_code`.
///
/// A missing user fails with [`CoreError::CredentialsValidation`] without
/// touching the database. Otherwise the permission paths are loaded and
/// judged by [`evaluate_grants`]; every denial is logged.
pub async fn validate_transaction_access(
    pool: &PgPool,
    user: Option<&User>,
    operation_code: &str,
) -> Result<(), AppError> {
    let user = user.ok_or(CoreError::CredentialsValidation)?;

    let paths = AccessRepo::authorized_transactions(pool, user.id, operation_code).await?;
    let codes: Vec<String> = paths.into_iter().map(|t| t.operation_code).collect();

    evaluate_grants(user.id, operation_code, &codes).map_err(|err| {
        tracing::warn!(
            user_id = user.id,
            operation_code,
            paths = codes.len(),
            error = %err,
            "Access denied",
        );
        AppError::Core(err)
    })
}

/// Requires the caller to be authorized for `O::CODE`.
///
/// ```ignore
/// async fn list_roles(
///     RequireOperation(auth, _): RequireOperation<ListRoles>,
/// ) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireOperation<O>(pub AuthUser, pub PhantomData<O>);

impl<O: Operation> FromRequestParts<AppState> for RequireOperation<O> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = resolve_caller(parts, state).await?;
        validate_transaction_access(&state.pool, user.as_ref(), O::CODE).await?;

        // validate_transaction_access rejects a missing user.
        let user = user.ok_or(CoreError::CredentialsValidation)?;
        Ok(RequireOperation(AuthUser { user }, PhantomData))
    }
}
