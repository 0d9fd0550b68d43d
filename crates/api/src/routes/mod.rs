pub mod auth;
pub mod crud;
pub mod health;
pub mod users;

use axum::Router;

use crate::handlers::resources::{Assignments, Authorizations, Roles, Transactions};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/token                                      issue token (public, form body)
///
/// /users                                           list, create
/// /users/{id}                                      get, update, delete
/// /users/{id}/transactions                         authorized transactions
///
/// /roles                                           list, create
/// /roles/{id}                                      get, update, delete
///
/// /transactions                                    list, create
/// /transactions/{id}                               get, update, delete
///
/// /assignments                                     list, create
/// /assignments/{id}                                get, update, delete
///
/// /authorizations                                  list, create
/// /authorizations/{id}                             get, update, delete
/// ```
///
/// Collection routes also answer with a trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(users::router())
        .merge(crud::resource_routes::<Roles>())
        .merge(crud::resource_routes::<Transactions>())
        .merge(crud::resource_routes::<Assignments>())
        .merge(crud::resource_routes::<Authorizations>())
}
