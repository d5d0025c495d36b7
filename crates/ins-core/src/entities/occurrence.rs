use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One observed interval attached to an insight. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Occurrence {
    pub insight_id: String,
    pub started: DateTime<Utc>,
    pub ended: DateTime<Utc>,
    pub is_faulted: bool,
    /// Whether the underlying sensor reading was trustworthy.
    pub is_valid: bool,
}

impl Occurrence {
    /// Whether the interval overlaps `[start, end)` with a non-empty intersection.
    #[must_use]
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.started < end && self.ended > start
    }

    /// A valid, faulted occurrence means the insight is actively firing.
    #[must_use]
    pub const fn is_active_fault(&self) -> bool {
        self.is_valid && self.is_faulted
    }
}
