//! Route wiring for any [`CrudResource`].

use axum::routing::get;
use axum::Router;

use crate::handlers::crud::{self, CrudResource};
use crate::state::AppState;

/// Mount the five CRUD routes of `R` under `/{R::PATH}`.
///
/// ```text
/// GET    /{path}, /{path}/    -> list
/// POST   /{path}, /{path}/    -> create
/// GET    /{path}/{id}         -> get
/// PUT    /{path}/{id}         -> update
/// DELETE /{path}/{id}         -> delete
/// ```
pub fn resource_routes<R: CrudResource>() -> Router<AppState> {
    let collection = format!("/{}", R::PATH);
    let item = format!("/{}/{{id}}", R::PATH);

    Router::new()
        .route(
            &collection,
            get(crud::list::<R>).post(crud::create::<R>),
        )
        .route(
            &format!("{collection}/"),
            get(crud::list::<R>).post(crud::create::<R>),
        )
        .route(
            &item,
            get(crud::get::<R>)
                .put(crud::update::<R>)
                .delete(crud::delete::<R>),
        )
}
