use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{InsightState, InsightStatus};

/// A fault or anomaly record tracked through its lifecycle.
///
/// The engine only reasons about `status`; the remaining fields are payload
/// carried for the calling layer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Insight {
    pub id: String,
    pub site_id: String,
    pub twin_id: Option<String>,
    pub rule_id: String,
    pub name: String,
    pub status: InsightStatus,
    pub state: InsightState,
    /// Priority: 1 (highest) to 4 (lowest).
    pub priority: u8,
    /// Whether a person reported the insight rather than a rule raising it.
    #[serde(default)]
    pub reported: bool,
    pub created_at: DateTime<Utc>,
    pub last_occurred_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}
