use contracts::domain::a001_org::aggregate::OrgId;
use contracts::domain::a002_rank::aggregate::{Rank, RankDto, RankId, RankPatch};

use super::messages;
use crate::domain::a001_org::messages as org_messages;
use crate::shared::data::db::Database;
use crate::shared::data::repository::assign_missing_ids;
use crate::shared::error::{ApiError, ApiResult};

/// Занято ли имя должности внутри организации (кроме записи `except`)
fn name_taken(db: &Database, org_id: &OrgId, name: &str, except: Option<&RankId>) -> bool {
    db.ranks.any(&|rank| {
        rank.org_id == *org_id && rank.name == name && Some(&rank.id) != except
    })
}

fn ensure_org_exists(db: &Database, org_id: &OrgId) -> ApiResult<()> {
    if db.orgs.exists(org_id) {
        Ok(())
    } else {
        Err(ApiError::not_found(org_messages::NOT_FOUND))
    }
}

/// Список должностей, опционально только одной организации
pub fn list(db: &Database, org_id: Option<&OrgId>) -> Vec<Rank> {
    match org_id {
        Some(org_id) => db.ranks.filter(&|rank| rank.org_id == *org_id),
        None => db.ranks.list(),
    }
}

pub fn get_by_id(db: &Database, id: &RankId) -> ApiResult<Rank> {
    db.ranks
        .get(id)
        .ok_or_else(|| ApiError::not_found(messages::NOT_FOUND))
}

/// Создание должности: организация должна существовать, имя уникально в её пределах
pub fn create(db: &mut Database, dto: RankDto) -> ApiResult<Rank> {
    if let Err(e) = ensure_org_exists(db, &dto.org_id) {
        tracing::warn!("Rank create rejected, org not found: {}", dto.org_id);
        return Err(e);
    }

    if name_taken(db, &dto.org_id, &dto.name, None) {
        tracing::warn!(
            "Rank create rejected, duplicate name {} in org {}",
            dto.name,
            dto.org_id
        );
        return Err(ApiError::conflict(messages::DUPLICATE_NAME));
    }

    let rank = Rank::new_for_insert(dto);
    db.ranks.insert(rank.clone());
    tracing::info!("Rank created: {} ({} / {})", rank.id, rank.org_id, rank.name);
    Ok(rank)
}

/// Обновление должности (PUT)
///
/// Смена организации проверяет её существование; смена имени проверяет уникальность
/// в пределах новой (или текущей) организации.
pub fn update(db: &mut Database, id: &RankId, patch: RankPatch) -> ApiResult<Rank> {
    let mut rank = get_by_id(db, id)?;

    if let Some(org_id) = &patch.org_id {
        if *org_id != rank.org_id {
            if let Err(e) = ensure_org_exists(db, org_id) {
                tracing::warn!("Rank {} update rejected, org not found: {}", id, org_id);
                return Err(e);
            }
        }
    }

    if let Some(name) = &patch.name {
        if *name != rank.name {
            let target_org = patch.org_id.as_ref().unwrap_or(&rank.org_id);
            if name_taken(db, target_org, name, Some(id)) {
                tracing::warn!("Rank {} update rejected, duplicate name: {}", id, name);
                return Err(ApiError::conflict(messages::DUPLICATE_NAME));
            }
        }
    }

    rank.apply(&patch);
    db.ranks.update(rank.clone());
    tracing::info!("Rank updated: {}", id);
    Ok(rank)
}

/// Частичное обновление (PATCH), без повторной валидации
pub fn patch(db: &mut Database, id: &RankId, patch: RankPatch) -> ApiResult<Rank> {
    let mut rank = get_by_id(db, id)?;
    rank.apply(&patch);
    db.ranks.update(rank.clone());
    tracing::info!("Rank patched: {}", id);
    Ok(rank)
}

/// Удаление должности; запрещено, пока на неё назначен хотя бы один сотрудник
pub fn delete(db: &mut Database, id: &RankId) -> ApiResult<()> {
    if !db.ranks.exists(id) {
        tracing::warn!("Rank {} delete rejected: not found", id);
        return Err(ApiError::not_found(messages::NOT_FOUND));
    }

    if db.users.any(&|user| user.rank_id == *id) {
        tracing::warn!("Rank {} delete blocked: has users", id);
        return Err(ApiError::blocked(messages::HAS_USERS));
    }

    db.ranks.delete(id);
    tracing::info!("Rank deleted: {}", id);
    Ok(())
}

pub fn sync_grid(db: &mut Database, rows: Vec<Rank>) -> ApiResult<Vec<Rank>> {
    if rows.is_empty() {
        return Err(ApiError::bad_request(messages::EMPTY_GRID));
    }

    db.ranks.replace_all(assign_missing_ids(rows));
    tracing::info!("Rank grid synced: {} rows", db.ranks.len());
    Ok(db.ranks.list())
}
