//! Collaborator ports.
//!
//! The service reaches every external fact through these traits. Each method
//! returns a `Send` future so the service can run on a multi-threaded runtime.

use std::future::Future;

use ins_core::entities::{Dependency, Insight, Occurrence, StatusLogEntry};
use ins_core::enums::InsightStatus;
use ins_core::errors::CoreError;
use ins_core::responses::TicketStatistic;

/// Insight records, their occurrences, status history, and dependency edges.
pub trait InsightStore: Send + Sync {
    /// Look up an insight. `None` when it does not exist.
    fn get_insight(
        &self,
        insight_id: &str,
    ) -> impl Future<Output = Result<Option<Insight>, CoreError>> + Send;

    /// The occurrence with the latest `started`, if any.
    fn latest_occurrence(
        &self,
        insight_id: &str,
    ) -> impl Future<Output = Result<Option<Occurrence>, CoreError>> + Send;

    /// Every occurrence of the insight, in any order.
    fn occurrences(
        &self,
        insight_id: &str,
    ) -> impl Future<Output = Result<Vec<Occurrence>, CoreError>> + Send;

    /// The status log in append order.
    fn status_history(
        &self,
        insight_id: &str,
    ) -> impl Future<Output = Result<Vec<StatusLogEntry>, CoreError>> + Send;

    /// Outgoing dependency edges of the insight.
    fn dependencies(
        &self,
        insight_id: &str,
    ) -> impl Future<Output = Result<Vec<Dependency>, CoreError>> + Send;

    /// Set the status and append the log entry as one atomic write.
    ///
    /// The write only happens while the stored status is still `expected`;
    /// otherwise it fails with `CoreError::Conflict` and nothing changes.
    fn apply_status(
        &self,
        insight_id: &str,
        expected: InsightStatus,
        status: InsightStatus,
        entry: Option<StatusLogEntry>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Work-order system: is any ticket for this insight still open?
pub trait WorkOrderLookup: Send + Sync {
    fn has_open_work(
        &self,
        insight_id: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Per-insight ticket counts, used to enrich activity facets.
pub trait TicketStatistics: Send + Sync {
    fn ticket_statistics(
        &self,
        insight_ids: &[String],
    ) -> impl Future<Output = Result<Vec<TicketStatistic>, CoreError>> + Send;
}
