use contracts::domain::a001_org::aggregate::OrgId;
use contracts::domain::a002_rank::aggregate::RankId;
use contracts::domain::a003_user::aggregate::{User, UserDto, UserId, UserPatch};

use super::messages;
use crate::domain::a001_org::messages as org_messages;
use crate::domain::a002_rank::messages as rank_messages;
use crate::shared::data::db::Database;
use crate::shared::data::repository::assign_missing_ids;
use crate::shared::error::{ApiError, ApiResult};

fn email_taken(db: &Database, email: &str, except: Option<&UserId>) -> bool {
    db.users
        .any(&|user| user.email == email && Some(&user.id) != except)
}

fn ensure_org_exists(db: &Database, org_id: &OrgId) -> ApiResult<()> {
    if db.orgs.exists(org_id) {
        Ok(())
    } else {
        Err(ApiError::not_found(org_messages::NOT_FOUND))
    }
}

fn ensure_rank_exists(db: &Database, rank_id: &RankId) -> ApiResult<()> {
    if db.ranks.exists(rank_id) {
        Ok(())
    } else {
        Err(ApiError::not_found(rank_messages::NOT_FOUND))
    }
}

/// Список сотрудников с фильтрами по организации и/или должности (AND)
pub fn list(db: &Database, org_id: Option<&OrgId>, rank_id: Option<&RankId>) -> Vec<User> {
    if org_id.is_none() && rank_id.is_none() {
        return db.users.list();
    }
    db.users.filter(&|user| {
        org_id.map_or(true, |org_id| user.org_id == *org_id)
            && rank_id.map_or(true, |rank_id| user.rank_id == *rank_id)
    })
}

pub fn get_by_id(db: &Database, id: &UserId) -> ApiResult<User> {
    db.users
        .get(id)
        .ok_or_else(|| ApiError::not_found(messages::NOT_FOUND))
}

/// Создание сотрудника
///
/// Порядок проверок: организация, должность, глобальная уникальность email.
pub fn create(db: &mut Database, dto: UserDto) -> ApiResult<User> {
    if let Err(e) = ensure_org_exists(db, &dto.org_id) {
        tracing::warn!("User create rejected, org not found: {}", dto.org_id);
        return Err(e);
    }
    if let Err(e) = ensure_rank_exists(db, &dto.rank_id) {
        tracing::warn!("User create rejected, rank not found: {}", dto.rank_id);
        return Err(e);
    }

    if email_taken(db, &dto.email, None) {
        tracing::warn!("User create rejected, duplicate email: {}", dto.email);
        return Err(ApiError::conflict(messages::DUPLICATE_EMAIL));
    }

    let user = User::new_for_insert(dto);
    db.users.insert(user.clone());
    tracing::info!("User created: {} <{}>", user.id, user.email);
    Ok(user)
}

/// Обновление сотрудника (PUT): каждое изменяемое ссылочное/уникальное поле
/// проверяется отдельно
pub fn update(db: &mut Database, id: &UserId, patch: UserPatch) -> ApiResult<User> {
    let mut user = get_by_id(db, id)?;

    if let Some(org_id) = &patch.org_id {
        if *org_id != user.org_id {
            if let Err(e) = ensure_org_exists(db, org_id) {
                tracing::warn!("User {} update rejected, org not found: {}", id, org_id);
                return Err(e);
            }
        }
    }

    if let Some(rank_id) = &patch.rank_id {
        if *rank_id != user.rank_id {
            if let Err(e) = ensure_rank_exists(db, rank_id) {
                tracing::warn!("User {} update rejected, rank not found: {}", id, rank_id);
                return Err(e);
            }
        }
    }

    if let Some(email) = &patch.email {
        if *email != user.email && email_taken(db, email, Some(id)) {
            tracing::warn!("User {} update rejected, duplicate email: {}", id, email);
            return Err(ApiError::conflict(messages::DUPLICATE_EMAIL));
        }
    }

    user.apply(&patch);
    db.users.update(user.clone());
    tracing::info!("User updated: {}", id);
    Ok(user)
}

/// Частичное обновление (PATCH), без повторной валидации
pub fn patch(db: &mut Database, id: &UserId, patch: UserPatch) -> ApiResult<User> {
    let mut user = get_by_id(db, id)?;
    user.apply(&patch);
    db.users.update(user.clone());
    tracing::info!("User patched: {}", id);
    Ok(user)
}

/// Удаление сотрудника; на сотрудников ничто не ссылается
pub fn delete(db: &mut Database, id: &UserId) -> ApiResult<()> {
    if !db.users.delete(id) {
        tracing::warn!("User {} delete rejected: not found", id);
        return Err(ApiError::not_found(messages::NOT_FOUND));
    }
    tracing::info!("User deleted: {}", id);
    Ok(())
}

pub fn sync_grid(db: &mut Database, rows: Vec<User>) -> ApiResult<Vec<User>> {
    if rows.is_empty() {
        return Err(ApiError::bad_request(messages::EMPTY_GRID));
    }

    db.users.replace_all(assign_missing_ids(rows));
    tracing::info!("User grid synced: {} rows", db.users.len());
    Ok(db.users.list())
}
