use contracts::domain::a001_org::aggregate::{Org, OrgDto, OrgId, OrgPatch};

use super::messages;
use crate::shared::data::db::Database;
use crate::shared::data::repository::assign_missing_ids;
use crate::shared::error::{ApiError, ApiResult};

/// Занято ли имя какой-либо организацией, кроме `except`
fn name_taken(db: &Database, name: &str, except: Option<&OrgId>) -> bool {
    db.orgs
        .any(&|org| org.name == name && Some(&org.id) != except)
}

/// Получение списка всех организаций
pub fn list_all(db: &Database) -> Vec<Org> {
    db.orgs.list()
}

/// Получение организации по ID
pub fn get_by_id(db: &Database, id: &OrgId) -> ApiResult<Org> {
    db.orgs
        .get(id)
        .ok_or_else(|| ApiError::not_found(messages::NOT_FOUND))
}

/// Создание новой организации
///
/// Имя уникально среди всех организаций (точное совпадение с учётом регистра).
/// `parent_id` не проверяется.
pub fn create(db: &mut Database, dto: OrgDto) -> ApiResult<Org> {
    if name_taken(db, &dto.name, None) {
        tracing::warn!("Org create rejected, duplicate name: {}", dto.name);
        return Err(ApiError::conflict(messages::DUPLICATE_NAME));
    }

    let org = Org::new_for_insert(dto);
    db.orgs.insert(org.clone());
    tracing::info!("Org created: {} ({})", org.id, org.name);
    Ok(org)
}

/// Обновление организации (PUT)
///
/// Уникальность имени проверяется, только если имя действительно меняется.
pub fn update(db: &mut Database, id: &OrgId, patch: OrgPatch) -> ApiResult<Org> {
    let mut org = get_by_id(db, id)?;

    if let Some(name) = &patch.name {
        if *name != org.name && name_taken(db, name, Some(id)) {
            tracing::warn!("Org {} update rejected, duplicate name: {}", id, name);
            return Err(ApiError::conflict(messages::DUPLICATE_NAME));
        }
    }

    org.apply(&patch);
    db.orgs.update(org.clone());
    tracing::info!("Org updated: {}", id);
    Ok(org)
}

/// Частичное обновление организации (PATCH), без повторной валидации
pub fn patch(db: &mut Database, id: &OrgId, patch: OrgPatch) -> ApiResult<Org> {
    let mut org = get_by_id(db, id)?;
    org.apply(&patch);
    db.orgs.update(org.clone());
    tracing::info!("Org patched: {}", id);
    Ok(org)
}

/// Удаление организации
///
/// Запрещено, пока есть дочерние организации или должности этой организации.
pub fn delete(db: &mut Database, id: &OrgId) -> ApiResult<()> {
    if !db.orgs.exists(id) {
        tracing::warn!("Org {} delete rejected: not found", id);
        return Err(ApiError::not_found(messages::NOT_FOUND));
    }

    if db
        .orgs
        .any(&|org| org.id != *id && org.parent_id.as_ref() == Some(id))
    {
        tracing::warn!("Org {} delete blocked: has children", id);
        return Err(ApiError::blocked(messages::HAS_CHILDREN));
    }

    if db.ranks.any(&|rank| rank.org_id == *id) {
        tracing::warn!("Org {} delete blocked: has ranks", id);
        return Err(ApiError::blocked(messages::HAS_RANKS));
    }

    db.orgs.delete(id);
    tracing::info!("Org deleted: {}", id);
    Ok(())
}

/// Сохранение всего грида: коллекция заменяется переданными строками
pub fn sync_grid(db: &mut Database, rows: Vec<Org>) -> ApiResult<Vec<Org>> {
    if rows.is_empty() {
        return Err(ApiError::bad_request(messages::EMPTY_GRID));
    }

    db.orgs.replace_all(assign_missing_ids(rows));
    tracing::info!("Org grid synced: {} rows", db.orgs.len());
    Ok(db.orgs.list())
}
