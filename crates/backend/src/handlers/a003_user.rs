use axum::extract::{Path, Query, State};
use axum::Json;
use contracts::domain::a003_user::aggregate::{User, UserDto, UserId, UserListQuery, UserPatch};
use contracts::shared::grid::GridPayload;

use super::{respond, Reply};
use crate::domain::a003_user::{messages, service};
use crate::shared::state::AppState;

/// GET /api/users?orgId=&rankId=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> Reply<Vec<User>> {
    let db = state.db.read().await;
    let org_id = query.org_id();
    let rank_id = query.rank_id();
    respond(
        Ok(service::list(&db, org_id.as_ref(), rank_id.as_ref())),
        messages::LISTED,
    )
}

/// GET /api/users/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Reply<User> {
    let db = state.db.read().await;
    respond(service::get_by_id(&db, &UserId::new(id)), messages::FETCHED)
}

/// POST /api/users
pub async fn create(State(state): State<AppState>, Json(dto): Json<UserDto>) -> Reply<User> {
    let mut db = state.db.write().await;
    respond(service::create(&mut db, dto), messages::CREATED)
}

/// PUT /api/users/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Reply<User> {
    let mut db = state.db.write().await;
    respond(
        service::update(&mut db, &UserId::new(id), patch),
        messages::UPDATED,
    )
}

/// PATCH /api/users/:id
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Reply<User> {
    let mut db = state.db.write().await;
    respond(
        service::patch(&mut db, &UserId::new(id), patch),
        messages::PATCHED,
    )
}

/// DELETE /api/users/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Reply<()> {
    let mut db = state.db.write().await;
    respond(service::delete(&mut db, &UserId::new(id)), messages::DELETED)
}

/// POST /api/users/grid-sync
pub async fn sync_grid(
    State(state): State<AppState>,
    Json(payload): Json<GridPayload<User>>,
) -> Reply<Vec<User>> {
    let mut db = state.db.write().await;
    respond(service::sync_grid(&mut db, payload.rows), messages::SYNCED)
}
