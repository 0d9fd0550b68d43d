//! Generic CRUD handlers shared by every resource.
//!
//! A resource implements [`CrudResource`] to bind an entity to its request
//! payload, response shape and the five operation markers guarding it. The
//! handlers below are then mounted once per resource by
//! [`routes::crud::resource_routes`](crate::routes::crud::resource_routes).

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rbac_core::types::DbId;
use rbac_db::entity::Entity;
use rbac_db::repositories::CrudRepo;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::client_ip::ClientIp;
use crate::middleware::rbac::{Operation, RequireOperation};
use crate::query::ListParams;
use crate::response::{DetailResponse, ListResponse};
use crate::state::AppState;

/// Binds an entity to its HTTP surface.
pub trait CrudResource: Send + Sync + 'static {
    type Entity: Entity + 'static;
    /// Request body for create and full-replace update.
    type Payload: DeserializeOwned + Send + 'static;
    /// Representation returned to clients.
    type Response: Serialize + Send + 'static;

    /// Plural resource name: URL segment and list envelope key.
    const PATH: &'static str;

    type Create: Operation;
    type Update: Operation;
    type List: Operation;
    type Delete: Operation;
    type Get: Operation;

    /// Turn a request payload into the entity's mutable columns.
    fn into_input(payload: Self::Payload) -> AppResult<<Self::Entity as Entity>::Input>;

    fn to_response(entity: Self::Entity) -> Self::Response;
}

/// GET /api/v1/{resource}
pub async fn list<R: CrudResource>(
    _auth: RequireOperation<R::List>,
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> AppResult<Json<ListResponse<R::Response>>> {
    let params = ListParams::from_query(query)?;
    let rows = CrudRepo::<R::Entity>::get_all(&state.pool, params.page, &params.filters).await?;

    let items = rows.into_iter().map(R::to_response).collect();
    Ok(Json(ListResponse::new(R::PATH, items)))
}

/// GET /api/v1/{resource}/{id}
pub async fn get<R: CrudResource>(
    _auth: RequireOperation<R::Get>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<R::Response>> {
    let entity = CrudRepo::<R::Entity>::get(&state.pool, id).await?;
    Ok(Json(R::to_response(entity)))
}

/// POST /api/v1/{resource}
pub async fn create<R: CrudResource>(
    RequireOperation(auth, _): RequireOperation<R::Create>,
    ClientIp(ip): ClientIp,
    State(state): State<AppState>,
    Json(payload): Json<R::Payload>,
) -> AppResult<(StatusCode, Json<R::Response>)> {
    let input = R::into_input(payload)?;
    let entity = CrudRepo::<R::Entity>::save(&state.pool, &input, &auth.stamp(ip)).await?;

    let name = <R::Entity as Entity>::NAME;
    tracing::info!(entity = name, id = entity.id(), user_id = auth.user.id, "Entity created");

    Ok((StatusCode::CREATED, Json(R::to_response(entity))))
}

/// PUT /api/v1/{resource}/{id}
///
/// Full replace: every mutable column takes the payload's value.
pub async fn update<R: CrudResource>(
    RequireOperation(auth, _): RequireOperation<R::Update>,
    ClientIp(ip): ClientIp,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<R::Payload>,
) -> AppResult<Json<R::Response>> {
    let input = R::into_input(payload)?;
    let entity = CrudRepo::<R::Entity>::update(&state.pool, id, &input, &auth.stamp(ip)).await?;

    let name = <R::Entity as Entity>::NAME;
    tracing::info!(entity = name, id, user_id = auth.user.id, "Entity updated");

    Ok(Json(R::to_response(entity)))
}

/// DELETE /api/v1/{resource}/{id}
pub async fn delete<R: CrudResource>(
    RequireOperation(auth, _): RequireOperation<R::Delete>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    CrudRepo::<R::Entity>::delete(&state.pool, id).await?;

    let name = <R::Entity as Entity>::NAME;
    tracing::info!(entity = name, id, user_id = auth.user.id, "Entity deleted");

    Ok(Json(DetailResponse {
        detail: format!("{name} deleted successfully"),
    }))
}
