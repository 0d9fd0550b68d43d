#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use rbac_api::auth::jwt::{generate_access_token, JwtConfig};
use rbac_api::auth::password::hash_password;
use rbac_api::config::ServerConfig;
use rbac_api::router::build_app_router;
use rbac_api::state::AppState;
use rbac_core::operations::ADMINISTRATOR_ROLE;
use rbac_core::pagination::Page;
use rbac_db::models::assignment::{Assignment, AssignmentInput};
use rbac_db::models::audit::AuditStamp;
use rbac_db::models::role::Role;
use rbac_db::models::user::{User, UserInput};
use rbac_db::repositories::CrudRepo;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "test_password_123!";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-long-enough".to_string(),
        access_token_expiry_mins: 30,
        issuer: "rbac-api".to_string(),
    }
}

/// Build a test `ServerConfig` with safe defaults and no bootstrap admin.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8888".to_string()],
        request_timeout_secs: 30,
        jwt: jwt_config(),
        bootstrap_admin: None,
    }
}

/// Build the full application router, with the production middleware stack,
/// over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user whose password is [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str) -> User {
    let input = UserInput {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        display_name: format!("{username} (test)"),
    };
    CrudRepo::<User>::save(pool, &input, &AuditStamp::system())
        .await
        .expect("user creation should succeed")
}

pub async fn assign_role(pool: &PgPool, user: &User, role: &Role) {
    let input = AssignmentInput {
        user_id: user.id,
        role_id: role.id,
    };
    CrudRepo::<Assignment>::save(pool, &input, &AuditStamp::system())
        .await
        .expect("assignment should succeed");
}

pub async fn administrator_role(pool: &PgPool) -> Role {
    let filter = [("name".to_string(), ADMINISTRATOR_ROLE.to_string())];
    CrudRepo::<Role>::get_all(pool, Page::default(), &filter)
        .await
        .unwrap()
        .into_iter()
        .find(|r| r.name == ADMINISTRATOR_ROLE)
        .expect("administrator role is seeded")
}

/// Create a user holding the seeded administrator role and return it with a
/// valid bearer token.
pub async fn create_admin(pool: &PgPool, username: &str) -> (User, String) {
    let user = create_user(pool, username).await;
    let role = administrator_role(pool).await;
    assign_role(pool, &user, &role).await;
    let token = token_for(&user);
    (user, token)
}

pub fn token_for(user: &User) -> String {
    generate_access_token(&user.username, &jwt_config()).expect("token generation")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, form: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
