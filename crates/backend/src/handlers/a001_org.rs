use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a001_org::aggregate::{Org, OrgDto, OrgId, OrgPatch};
use contracts::shared::grid::GridPayload;

use super::{respond, Reply};
use crate::domain::a001_org::{messages, service};
use crate::shared::state::AppState;

/// GET /api/orgs
pub async fn list_all(State(state): State<AppState>) -> Reply<Vec<Org>> {
    let db = state.db.read().await;
    respond(Ok(service::list_all(&db)), messages::LISTED)
}

/// GET /api/orgs/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Reply<Org> {
    let db = state.db.read().await;
    respond(service::get_by_id(&db, &OrgId::new(id)), messages::FETCHED)
}

/// POST /api/orgs
pub async fn create(State(state): State<AppState>, Json(dto): Json<OrgDto>) -> Reply<Org> {
    let mut db = state.db.write().await;
    respond(service::create(&mut db, dto), messages::CREATED)
}

/// PUT /api/orgs/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<OrgPatch>,
) -> Reply<Org> {
    let mut db = state.db.write().await;
    respond(
        service::update(&mut db, &OrgId::new(id), patch),
        messages::UPDATED,
    )
}

/// PATCH /api/orgs/:id
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<OrgPatch>,
) -> Reply<Org> {
    let mut db = state.db.write().await;
    respond(
        service::patch(&mut db, &OrgId::new(id), patch),
        messages::PATCHED,
    )
}

/// DELETE /api/orgs/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Reply<()> {
    let mut db = state.db.write().await;
    respond(service::delete(&mut db, &OrgId::new(id)), messages::DELETED)
}

/// POST /api/orgs/grid-sync
pub async fn sync_grid(
    State(state): State<AppState>,
    Json(payload): Json<GridPayload<Org>>,
) -> Reply<Vec<Org>> {
    let mut db = state.db.write().await;
    respond(service::sync_grid(&mut db, payload.rows), messages::SYNCED)
}
