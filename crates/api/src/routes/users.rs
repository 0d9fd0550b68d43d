//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use super::crud::resource_routes;
use crate::handlers::users::{self, Users};
use crate::state::AppState;

/// The generic user CRUD routes plus:
///
/// ```text
/// GET /users/{id}/transactions    -> list_transactions
/// ```
pub fn router() -> Router<AppState> {
    resource_routes::<Users>().route(
        "/users/{id}/transactions",
        get(users::list_transactions),
    )
}
