//! JWT-based caller resolution.

use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use rbac_db::models::audit::AuditStamp;
use rbac_db::models::user::User;
use rbac_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller, resolved from the `sub` claim of a Bearer token.
///
/// Handed to handlers by [`RequireOperation`](super::rbac::RequireOperation).
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    /// Audit stamp for writes performed by this caller from `ip`.
    pub fn stamp(&self, ip: impl Into<String>) -> AuditStamp {
        AuditStamp::new(self.user.username.clone(), ip)
    }
}

/// Resolve the caller behind the request's Bearer token.
///
/// Returns `Ok(None)` when the header is missing or malformed, the token is
/// invalid or expired, or its subject no longer exists. Only database
/// failures are errors.
pub async fn resolve_caller(parts: &Parts, state: &AppState) -> Result<Option<User>, AppError> {
    let Some(token) = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    else {
        return Ok(None);
    };

    let claims = match validate_token(token, &state.config.jwt) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected bearer token");
            return Ok(None);
        }
    };

    Ok(UserRepo::find_by_username(&state.pool, &claims.sub).await?)
}
