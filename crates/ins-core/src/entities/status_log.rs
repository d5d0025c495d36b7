use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{InsightStatus, SourceType};

/// One immutable record of an insight's status at a point in time.
///
/// Append-only: rows are never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusLogEntry {
    pub id: String,
    pub insight_id: String,
    pub status: InsightStatus,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<String>,
    pub source_type: SourceType,
    pub source_id: Option<String>,
    pub reason: Option<String>,
}

/// Identity of whoever requested a status change.
///
/// At least one of `user_id` or `source_id` must be set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Option<String>,
    pub source_type: SourceType,
    pub source_id: Option<String>,
}

impl Actor {
    /// A person acting through the UI.
    #[must_use]
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            source_type: SourceType::User,
            source_id: None,
        }
    }

    /// An application acting on its own behalf.
    #[must_use]
    pub fn app(source_type: SourceType, source_id: impl Into<String>) -> Self {
        Self {
            user_id: None,
            source_type,
            source_id: Some(source_id.into()),
        }
    }

    /// Whether the actor carries any identity at all.
    #[must_use]
    pub fn is_identified(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.user_id) || present(&self.source_id)
    }
}
