//! The `users` resource: password hashing on write, hash-free responses, and
//! the authorized-transactions listing.

use axum::extract::{Path, State};
use axum::Json;
use rbac_core::types::DbId;
use rbac_db::models::transaction::Transaction;
use rbac_db::models::user::{User, UserInput, UserResponse};
use rbac_db::repositories::{AccessRepo, CrudRepo};
use serde::Deserialize;

use super::crud::CrudResource;
use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{
    CreateUser, DeleteUser, GetUser, ListUserTransactions, ListUsers, RequireOperation, UpdateUser,
};
use crate::response::ListResponse;
use crate::state::AppState;

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// The plaintext password is hashed before it reaches the repository.
#[derive(Deserialize)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
}

pub struct Users;

impl CrudResource for Users {
    type Entity = User;
    type Payload = UserPayload;
    type Response = UserResponse;

    const PATH: &'static str = "users";

    type Create = CreateUser;
    type Update = UpdateUser;
    type List = ListUsers;
    type Delete = DeleteUser;
    type Get = GetUser;

    fn into_input(payload: UserPayload) -> AppResult<UserInput> {
        rbac_core::validation::validate_required("password", &payload.password)?;
        let password_hash = hash_password(&payload.password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        Ok(UserInput {
            username: payload.username,
            email: payload.email,
            password_hash,
            display_name: payload.display_name,
        })
    }

    fn to_response(user: User) -> UserResponse {
        user.into()
    }
}

/// GET /api/v1/users/{user_id}/transactions
///
/// Distinct transactions the user reaches through their roles, ordered by
/// operation code.
pub async fn list_transactions(
    _auth: RequireOperation<ListUserTransactions>,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<ListResponse<Transaction>>> {
    // 404 for unknown users rather than an empty list.
    CrudRepo::<User>::get(&state.pool, user_id).await?;

    let transactions = AccessRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(ListResponse::new("transactions", transactions)))
}
