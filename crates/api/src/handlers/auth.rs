//! Handler for token issuance.

use axum::extract::State;
use axum::{Form, Json};
use rbac_core::error::CoreError;
use rbac_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{verify_password, verify_password_for_missing_user};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Form body for `POST /auth/token`.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// POST /api/v1/auth/token
///
/// Exchange a username and password for a bearer token. Unknown users and
/// wrong passwords get the same error and the same hashing cost.
pub async fn issue_token(
    State(state): State<AppState>,
    Form(input): Form<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let Some(user) = UserRepo::find_by_username(&state.pool, &input.username).await? else {
        verify_password_for_missing_user(&input.password);
        tracing::info!("Rejected login attempt for unknown username");
        return Err(CoreError::IncorrectCredential.into());
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(user_id = user.id, "Rejected login attempt");
        return Err(CoreError::IncorrectCredential.into());
    }

    let jwt = &state.config.jwt;
    let access_token = generate_access_token(&user.username, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "Access token issued");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        expires_in: jwt.expires_in_secs(),
    }))
}
