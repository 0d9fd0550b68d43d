//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use assert_matches::assert_matches;
use axum::http::header::WWW_AUTHENTICATE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use rbac_api::error::AppError;
use rbac_core::error::CoreError;
use rbac_db::error::RepoError;

/// Convert an `AppError` into its status code, `WWW-Authenticate` header and
/// parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, Option<String>, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let challenge = response
        .headers()
        .get(WWW_AUTHENTICATE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, challenge, json)
}

#[tokio::test]
async fn credentials_validation_returns_401_with_challenge() {
    let (status, challenge, json) =
        error_to_response(AppError::Core(CoreError::CredentialsValidation)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(challenge.as_deref(), Some("Bearer"));
    assert_eq!(json["code"], "CREDENTIALS_VALIDATION");
    assert_eq!(json["error"], "Could not validate credentials");
}

#[tokio::test]
async fn illegal_access_names_user_and_transaction() {
    let err = AppError::Core(CoreError::IllegalAccess {
        user_id: 4,
        operation_code: "1050001".into(),
    });

    let (status, challenge, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(challenge.is_some());
    assert_eq!(json["code"], "ILLEGAL_ACCESS");
    assert_eq!(
        json["error"],
        "User[4] not authorized to access Transaction[1050001]"
    );
}

#[tokio::test]
async fn ambiguous_authorization_returns_401() {
    let err = AppError::Core(CoreError::AmbiguousAuthorization {
        user_id: 4,
        operation_code: "1050001".into(),
    });

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "AMBIGUOUS_AUTHORIZATION");
}

#[tokio::test]
async fn incorrect_credential_is_generic() {
    let (status, _, json) = error_to_response(AppError::Core(CoreError::IncorrectCredential)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "INCORRECT_CREDENTIAL");
    assert_eq!(json["error"], "Incorrect email or password");
}

#[tokio::test]
async fn integrity_validation_hides_constraint_detail() {
    let err = AppError::Core(CoreError::IntegrityValidation {
        entity: "Role",
        detail: "duplicate key value violates unique constraint \"uq_roles_name\"".into(),
    });

    let (status, challenge, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(challenge.is_none());
    assert_eq!(json["code"], "INTEGRITY_VALIDATION");
    assert_eq!(json["error"], "Object Role was not accepted");
}

#[tokio::test]
async fn not_found_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "User",
        id: 42,
    });

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "User with ID [42] not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("email is invalid".into()));

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "email is invalid");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    for err in [
        AppError::InternalError("secret stack trace".into()),
        AppError::Core(CoreError::Internal("secret".into())),
        AppError::Database(sqlx::Error::PoolTimedOut),
    ] {
        let (status, _, json) = error_to_response(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
    }
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, _, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn repo_errors_keep_their_domain_meaning() {
    let err: AppError = RepoError::Core(CoreError::NotFound {
        entity: "Role",
        id: 1,
    })
    .into();
    assert_matches!(err, AppError::Core(CoreError::NotFound { .. }));

    let err: AppError = RepoError::Database(sqlx::Error::PoolClosed).into();
    assert_matches!(err, AppError::Database(_));
}
