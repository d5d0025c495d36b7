//! Response types returned by the service layer.
//!
//! These structs define the shape of results for status changes, status
//! history queries, and the two diagnostics queries.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Insight;
use crate::enums::{InsightStatus, SourceType};

/// Outcome of an operation that can legitimately return no body.
///
/// `NoContent` is a success signal distinct from an empty payload: a status
/// change on (or to) a deleted insight, or a history query with zero rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Content(T),
    NoContent,
}

impl<T> Reply<T> {
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent)
    }

    #[must_use]
    pub fn into_content(self) -> Option<T> {
        match self {
            Self::Content(value) => Some(value),
            Self::NoContent => None,
        }
    }
}

/// Result of an accepted status change.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusChangeResponse {
    pub insight_id: String,
    pub previous_status: InsightStatus,
    pub status: InsightStatus,
    /// Whether a status log entry was appended (false for no-op changes).
    pub logged: bool,
}

/// "Previously entered this status N times" counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistorySummary {
    pub previously_resolved: u32,
    pub previously_ignored: u32,
}

/// A status log row annotated with recurrence flags, for presentation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusHistoryEntry {
    pub id: String,
    pub status: InsightStatus,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<String>,
    pub source_type: SourceType,
    pub source_id: Option<String>,
    pub reason: Option<String>,
    pub previously_resolved: bool,
    pub previously_ignored: bool,
}

/// An insight with its history counters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InsightView {
    pub insight: Insight,
    pub previously_resolved: u32,
    pub previously_ignored: u32,
}

/// One fixed-granularity faulty / not-faulty sub-interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimelineSpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub is_faulty: bool,
}

/// Diagnostic record for one insight reached while walking the dependency graph.
///
/// `timeline` is built from the occurrences of `baseline_insight_id`, the
/// immediate predecessor on the walked path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub insight_id: String,
    pub baseline_insight_id: String,
    pub relationship: String,
    pub depth: u32,
    pub timeline: Vec<TimelineSpan>,
}

/// Lightweight overview of one direct dependent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub insight_id: String,
    pub relationship: String,
    /// Start of the dependent's most recent faulted occurrence, if it ever faulted.
    pub reference_timestamp: Option<DateTime<Utc>>,
}

/// Ticket counts for one insight, supplied by the work-order collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TicketStatistic {
    pub insight_id: String,
    pub open_count: u32,
    pub total_count: u32,
}
