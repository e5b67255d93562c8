use crate::domain::a001_org::aggregate::OrgId;
use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор должности (직급)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankId(pub String);

impl RankId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl AggregateId for RankId {
    fn prefix() -> &'static str {
        "rank"
    }

    fn from_raw(value: String) -> Self {
        Self(value)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Должность внутри организации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rank {
    /// Пустой или отсутствующий id в строке grid-sync заменяется новым
    #[serde(default)]
    pub id: RankId,
    pub org_id: OrgId,
    pub name: String,
    /// Чем меньше, тем выше в иерархии
    pub level: i32,
    pub is_active: bool,
}

impl Rank {
    pub fn new_for_insert(dto: RankDto) -> Self {
        Self {
            id: RankId::generate(),
            org_id: dto.org_id,
            name: dto.name,
            level: dto.level,
            is_active: dto.is_active,
        }
    }

    pub fn apply(&mut self, patch: &RankPatch) {
        if let Some(org_id) = &patch.org_id {
            self.org_id = org_id.clone();
        }
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

impl AggregateRoot for Rank {
    type Id = RankId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "ranks"
    }

    fn element_name() -> &'static str {
        "직급"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания должности
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankDto {
    pub org_id: OrgId,
    pub name: String,
    pub level: i32,
    pub is_active: bool,
}

/// Частичное изменение должности (PUT/PATCH)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<OrgId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Фильтр списка должностей (`GET /api/ranks?orgId=`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankListQuery {
    #[serde(default)]
    pub org_id: Option<String>,
}

impl RankListQuery {
    /// Пустое значение параметра равносильно его отсутствию
    pub fn org_id(&self) -> Option<OrgId> {
        self.org_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(OrgId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_patch_changes_only_present_fields() {
        let mut rank = Rank {
            id: RankId::new("rank-1"),
            org_id: OrgId::new("org-1"),
            name: "임원".into(),
            level: 1,
            is_active: true,
        };
        rank.apply(&RankPatch {
            level: Some(3),
            is_active: Some(false),
            ..Default::default()
        });
        assert_eq!(rank.level, 3);
        assert!(!rank.is_active);
        assert_eq!(rank.name, "임원");
        assert_eq!(rank.org_id, OrgId::new("org-1"));
    }

    #[test]
    fn test_empty_org_filter_is_ignored() {
        let query = RankListQuery {
            org_id: Some(String::new()),
        };
        assert_eq!(query.org_id(), None);

        let query: RankListQuery = serde_json::from_str(r#"{"orgId":"org-2"}"#).unwrap();
        assert_eq!(query.org_id(), Some(OrgId::new("org-2")));
    }
}
