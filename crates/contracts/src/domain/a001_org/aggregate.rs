use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::serde_helpers::double_option;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор организации
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(pub String);

impl OrgId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl AggregateId for OrgId {
    fn prefix() -> &'static str {
        "org"
    }

    fn from_raw(value: String) -> Self {
        Self(value)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Организация (узел оргструктуры: головной офис, подразделение, команда)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Org {
    /// Пустой или отсутствующий id в строке grid-sync заменяется новым
    #[serde(default)]
    pub id: OrgId,
    pub name: String,

    /// `None` для корневой организации
    #[serde(default)]
    pub parent_id: Option<OrgId>,

    pub is_active: bool,
}

impl Org {
    /// Создать новую организацию со сгенерированным ID
    pub fn new_for_insert(dto: OrgDto) -> Self {
        Self {
            id: OrgId::generate(),
            name: dto.name,
            parent_id: dto.parent_id,
            is_active: dto.is_active,
        }
    }

    /// Наложить частичное изменение (поля, отсутствующие в patch, не трогаются)
    pub fn apply(&mut self, patch: &OrgPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(parent_id) = &patch.parent_id {
            self.parent_id = parent_id.clone();
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl AggregateRoot for Org {
    type Id = OrgId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "orgs"
    }

    fn element_name() -> &'static str {
        "조직"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания организации
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgDto {
    pub name: String,

    #[serde(default)]
    pub parent_id: Option<OrgId>,

    pub is_active: bool,
}

/// Частичное изменение организации (PUT/PATCH)
///
/// `parent_id`: отсутствует → не менять, `null` → сделать корневой.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<Option<OrgId>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_distinguishes_missing_and_null_parent() {
        let missing: OrgPatch = serde_json::from_str(r#"{"isActive":false}"#).unwrap();
        assert_eq!(missing.parent_id, None);
        assert_eq!(missing.is_active, Some(false));

        let null: OrgPatch = serde_json::from_str(r#"{"parentId":null}"#).unwrap();
        assert_eq!(null.parent_id, Some(None));

        let set: OrgPatch = serde_json::from_str(r#"{"parentId":"org-root"}"#).unwrap();
        assert_eq!(set.parent_id, Some(Some(OrgId::new("org-root"))));
    }

    #[test]
    fn test_apply_empty_patch_keeps_record() {
        let mut org = Org {
            id: OrgId::new("org-1"),
            name: "본사".into(),
            parent_id: None,
            is_active: true,
        };
        let before = org.clone();
        org.apply(&OrgPatch::default());
        assert_eq!(org, before);
    }

    #[test]
    fn test_apply_null_parent_makes_root() {
        let mut org = Org {
            id: OrgId::new("org-2"),
            name: "R&D센터".into(),
            parent_id: Some(OrgId::new("org-1")),
            is_active: true,
        };
        org.apply(&OrgPatch {
            parent_id: Some(None),
            ..Default::default()
        });
        assert!(org.is_root());
        assert_eq!(org.name, "R&D센터");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let org = Org {
            id: OrgId::new("org-root"),
            name: "SOFTONE HQ".into(),
            parent_id: None,
            is_active: true,
        };
        let json = serde_json::to_value(&org).unwrap();
        assert_eq!(json["parentId"], serde_json::Value::Null);
        assert_eq!(json["isActive"], true);
        assert_eq!(json["id"], "org-root");
    }

    #[test]
    fn test_generated_ids_are_prefixed_and_unique() {
        let a = OrgId::generate();
        let b = OrgId::generate();
        assert!(a.as_str().starts_with("org-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_collection_metadata() {
        assert_eq!(Org::full_name(), "a001_orgs");
        assert_eq!(Org::element_name(), "조직");
    }
}
