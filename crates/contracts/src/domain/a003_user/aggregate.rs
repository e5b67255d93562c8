use crate::domain::a001_org::aggregate::OrgId;
use crate::domain::a002_rank::aggregate::RankId;
use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор сотрудника
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl AggregateId for UserId {
    fn prefix() -> &'static str {
        "user"
    }

    fn from_raw(value: String) -> Self {
        Self(value)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Сотрудник: привязан к организации и должности, email уникален глобально
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Пустой или отсутствующий id в строке grid-sync заменяется новым
    #[serde(default)]
    pub id: UserId,
    pub org_id: OrgId,
    pub rank_id: RankId,
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

impl User {
    pub fn new_for_insert(dto: UserDto) -> Self {
        Self {
            id: UserId::generate(),
            org_id: dto.org_id,
            rank_id: dto.rank_id,
            name: dto.name,
            email: dto.email,
            is_active: dto.is_active,
        }
    }

    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(org_id) = &patch.org_id {
            self.org_id = org_id.clone();
        }
        if let Some(rank_id) = &patch.rank_id {
            self.rank_id = rank_id.clone();
        }
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

impl AggregateRoot for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "사용자"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания сотрудника
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub org_id: OrgId,
    pub rank_id: RankId,
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

/// Частичное изменение сотрудника (PUT/PATCH)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<OrgId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_id: Option<RankId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Фильтры списка сотрудников (`GET /api/users?orgId=&rankId=`), условия через AND
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    #[serde(default)]
    pub org_id: Option<String>,

    #[serde(default)]
    pub rank_id: Option<String>,
}

impl UserListQuery {
    pub fn org_id(&self) -> Option<OrgId> {
        self.org_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(OrgId::new)
    }

    pub fn rank_id(&self) -> Option<RankId> {
        self.rank_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(RankId::new)
    }
}
