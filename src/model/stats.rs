use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The logical kind of a stat record.
///
/// Each kind maps to its own table (`military_stats`, `resource_stats`,
/// `development_stats`) keyed by `user_id`, so there is at most one current
/// record per (user, kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Military,
    Resources,
    Development,
}

impl StatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Military => "military",
            Self::Resources => "resources",
            Self::Development => "development",
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored stat record, independent of which kind's table it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRecord {
    pub user_id: i32,
    pub stats: serde_json::Value,
    pub created_at: chrono::NaiveDateTime,
}

impl From<entity::military_stats::Model> for StatRecord {
    fn from(model: entity::military_stats::Model) -> Self {
        Self {
            user_id: model.user_id,
            stats: model.stats,
            created_at: model.created_at,
        }
    }
}

impl From<entity::resource_stats::Model> for StatRecord {
    fn from(model: entity::resource_stats::Model) -> Self {
        Self {
            user_id: model.user_id,
            stats: model.stats,
            created_at: model.created_at,
        }
    }
}

impl From<entity::development_stats::Model> for StatRecord {
    fn from(model: entity::development_stats::Model) -> Self {
        Self {
            user_id: model.user_id,
            stats: model.stats,
            created_at: model.created_at,
        }
    }
}
