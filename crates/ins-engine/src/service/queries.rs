//! Read-side queries: insight view, status history, activity facets.

use tracing::{debug, warn};

use ins_core::enums::{ActivityFacet, InsightStatus};
use ins_core::errors::CoreError;
use ins_core::responses::{InsightView, Reply, StatusHistoryEntry};

use crate::history;
use crate::ports::{InsightStore, TicketStatistics, WorkOrderLookup};
use crate::service::InsightService;

impl<S> InsightService<S>
where
    S: InsightStore + WorkOrderLookup + TicketStatistics,
{
    /// An insight with its "previously resolved / ignored" counters.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the insight is missing or deleted.
    pub async fn get_insight(&self, insight_id: &str) -> Result<InsightView, CoreError> {
        let insight = self.require_live_insight(insight_id).await?;
        let log = self.store.status_history(insight_id).await?;
        let summary = history::summarize(&log, insight.status);
        Ok(InsightView {
            insight,
            previously_resolved: summary.previously_resolved,
            previously_ignored: summary.previously_ignored,
        })
    }

    /// The status log, most recent first, with recurrence flags.
    ///
    /// Returns `NoContent` when the insight has no log entries.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the insight is missing or deleted.
    pub async fn get_status_history(
        &self,
        insight_id: &str,
    ) -> Result<Reply<Vec<StatusHistoryEntry>>, CoreError> {
        self.require_live_insight(insight_id).await?;
        let log = self.store.status_history(insight_id).await?;
        if log.is_empty() {
            return Ok(Reply::NoContent);
        }
        Ok(Reply::Content(history::annotate(&log)))
    }

    /// Activity filters that would match at least one of the given insights.
    ///
    /// Unknown ids are ignored. A failing ticket-statistics lookup drops the
    /// `Tickets` facet instead of failing the call.
    ///
    /// # Errors
    ///
    /// Returns store errors from loading insights or their history.
    pub async fn activity_facets(
        &self,
        insight_ids: &[String],
    ) -> Result<Vec<ActivityFacet>, CoreError> {
        let mut reported = false;
        let mut previously_resolved = false;
        let mut previously_ignored = false;

        for insight_id in insight_ids {
            let Some(insight) = self.store.get_insight(insight_id).await? else {
                debug!(insight_id, "facet lookup skipped unknown insight");
                continue;
            };
            reported |= insight.reported;
            let log = self.store.status_history(insight_id).await?;
            previously_resolved |= history::has_status(&log, InsightStatus::Resolved);
            previously_ignored |= history::has_status(&log, InsightStatus::Ignored);
        }

        let tickets = match self.store.ticket_statistics(insight_ids).await {
            Ok(stats) => stats.iter().any(|stat| stat.total_count > 0),
            Err(error) => {
                warn!(%error, "ticket statistics unavailable, omitting tickets facet");
                false
            }
        };

        let facets = [
            (tickets, ActivityFacet::Tickets),
            (previously_resolved, ActivityFacet::PreviouslyResolved),
            (previously_ignored, ActivityFacet::PreviouslyIgnored),
            (reported, ActivityFacet::Reported),
        ];
        Ok(facets
            .into_iter()
            .filter_map(|(present, facet)| present.then_some(facet))
            .collect())
    }
}
