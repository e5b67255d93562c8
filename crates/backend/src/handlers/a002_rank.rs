use axum::extract::{Path, Query, State};
use axum::Json;
use contracts::domain::a002_rank::aggregate::{Rank, RankDto, RankId, RankListQuery, RankPatch};
use contracts::shared::grid::GridPayload;

use super::{respond, Reply};
use crate::domain::a002_rank::{messages, service};
use crate::shared::state::AppState;

/// GET /api/ranks?orgId=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RankListQuery>,
) -> Reply<Vec<Rank>> {
    let db = state.db.read().await;
    let org_id = query.org_id();
    respond(Ok(service::list(&db, org_id.as_ref())), messages::LISTED)
}

/// GET /api/ranks/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Reply<Rank> {
    let db = state.db.read().await;
    respond(service::get_by_id(&db, &RankId::new(id)), messages::FETCHED)
}

/// POST /api/ranks
pub async fn create(State(state): State<AppState>, Json(dto): Json<RankDto>) -> Reply<Rank> {
    let mut db = state.db.write().await;
    respond(service::create(&mut db, dto), messages::CREATED)
}

/// PUT /api/ranks/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<RankPatch>,
) -> Reply<Rank> {
    let mut db = state.db.write().await;
    respond(
        service::update(&mut db, &RankId::new(id), patch),
        messages::UPDATED,
    )
}

/// PATCH /api/ranks/:id
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<RankPatch>,
) -> Reply<Rank> {
    let mut db = state.db.write().await;
    respond(
        service::patch(&mut db, &RankId::new(id), patch),
        messages::PATCHED,
    )
}

/// DELETE /api/ranks/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Reply<()> {
    let mut db = state.db.write().await;
    respond(service::delete(&mut db, &RankId::new(id)), messages::DELETED)
}

/// POST /api/ranks/grid-sync
pub async fn sync_grid(
    State(state): State<AppState>,
    Json(payload): Json<GridPayload<Rank>>,
) -> Reply<Vec<Rank>> {
    let mut db = state.db.write().await;
    respond(service::sync_grid(&mut db, payload.rows), messages::SYNCED)
}
