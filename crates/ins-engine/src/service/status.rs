//! Status changes: single and batch.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info};

use ins_core::entities::{Actor, Insight, StatusLogEntry};
use ins_core::enums::InsightStatus;
use ins_core::errors::CoreError;
use ins_core::ids::{PREFIX_STATUS_LOG, generate_id};
use ins_core::responses::{Reply, StatusChangeResponse};

use crate::guard::{self, Decision, TransitionInput};
use crate::ports::{InsightStore, TicketStatistics, WorkOrderLookup};
use crate::service::InsightService;

impl<S> InsightService<S>
where
    S: InsightStore + WorkOrderLookup + TicketStatistics,
{
    /// Request a status change for one insight.
    ///
    /// Returns `NoContent` when the insight is, or becomes, deleted.
    ///
    /// # Errors
    ///
    /// - `CoreError::Validation` if the actor has neither user id nor source id
    /// - `CoreError::NotFound` if the insight does not exist
    /// - `CoreError::InvalidTransition` / `BlockedByOpenWork` if the guard rejects
    /// - `CoreError::Conflict` if another change landed after the insight was read
    /// - collaborator errors from the store or work-order lookup
    pub async fn apply_status_change(
        &self,
        insight_id: &str,
        requested: InsightStatus,
        actor: &Actor,
        reason: Option<&str>,
    ) -> Result<Reply<StatusChangeResponse>, CoreError> {
        validate_actor(actor)?;
        let insight = self.require_insight(insight_id).await?;
        if insight.status == InsightStatus::Deleted {
            debug!(insight_id, "status change on deleted insight ignored");
            return Ok(Reply::NoContent);
        }

        let decision = self.decide_for(&insight, requested, actor).await?;
        self.commit(&insight, &decision, actor, reason).await?;

        Ok(match decision {
            Decision::AlreadyDeleted | Decision::Deleted { .. } => Reply::NoContent,
            Decision::Unchanged { status } => Reply::Content(StatusChangeResponse {
                insight_id: insight.id,
                previous_status: status,
                status,
                logged: false,
            }),
            Decision::Changed { from, to, .. } => Reply::Content(StatusChangeResponse {
                insight_id: insight.id,
                previous_status: from,
                status: to,
                logged: true,
            }),
        })
    }

    /// Request the same status for many insights, all or nothing.
    ///
    /// Unknown and deleted insights are skipped, as are insights already in the
    /// requested status (except for the ignored refresh). Every remaining
    /// insight is decided before anything is written. Returns the written
    /// changes.
    ///
    /// # Errors
    ///
    /// Same as [`Self::apply_status_change`]; the first rejection fails the
    /// whole batch with nothing written.
    pub async fn apply_batch_status_change(
        &self,
        insight_ids: &[String],
        requested: InsightStatus,
        actor: &Actor,
        reason: Option<&str>,
    ) -> Result<Vec<StatusChangeResponse>, CoreError> {
        validate_actor(actor)?;

        let mut seen = HashSet::new();
        let mut pending = Vec::new();
        for insight_id in insight_ids {
            if !seen.insert(insight_id.as_str()) {
                continue;
            }
            let Some(insight) = self.store.get_insight(insight_id).await? else {
                debug!(%insight_id, "batch skipped unknown insight");
                continue;
            };
            if insight.status == InsightStatus::Deleted
                || (insight.status == requested && requested != InsightStatus::Ignored)
            {
                continue;
            }
            let decision = self.decide_for(&insight, requested, actor).await?;
            if decision.appends_log() {
                pending.push((insight, decision));
            }
        }

        let mut written = Vec::with_capacity(pending.len());
        for (insight, decision) in &pending {
            self.commit(insight, decision, actor, reason).await?;
            written.push(StatusChangeResponse {
                insight_id: insight.id.clone(),
                previous_status: insight.status,
                status: decision.resulting_status(),
                logged: true,
            });
        }

        info!(
            requested = %requested,
            candidates = insight_ids.len(),
            written = written.len(),
            "batch status change applied"
        );
        Ok(written)
    }

    /// Gather the facts the guard needs, fetching each only when it matters.
    async fn decide_for(
        &self,
        insight: &Insight,
        requested: InsightStatus,
        actor: &Actor,
    ) -> Result<Decision, CoreError> {
        let input = TransitionInput {
            insight_id: &insight.id,
            current: insight.status,
            requested,
            trusted_source: self.is_trusted(actor),
        };

        let latest = if guard::is_ignored_refresh(input.current, input.requested) {
            self.store.latest_occurrence(&insight.id).await?
        } else {
            None
        };
        let open_work = if guard::requires_open_work(&input) {
            Some(self.store.has_open_work(&insight.id).await?)
        } else {
            None
        };

        let decision = guard::decide(&input, latest.as_ref(), || Ok(open_work.unwrap_or(false)))?;
        debug!(
            insight_id = %insight.id,
            current = %input.current,
            requested = %input.requested,
            resulting = %decision.resulting_status(),
            "status change decided"
        );
        Ok(decision)
    }

    /// Persist the decision: status plus one log entry, atomically, provided
    /// the stored status is still the one the decision was made from.
    async fn commit(
        &self,
        insight: &Insight,
        decision: &Decision,
        actor: &Actor,
        reason: Option<&str>,
    ) -> Result<(), CoreError> {
        if !decision.appends_log() {
            return Ok(());
        }

        let status = decision.resulting_status();
        let entry = StatusLogEntry {
            id: generate_id(PREFIX_STATUS_LOG)?,
            insight_id: insight.id.clone(),
            status,
            created_at: Utc::now(),
            user_id: actor.user_id.clone(),
            source_type: actor.source_type,
            source_id: actor.source_id.clone(),
            reason: decision
                .derived_reason()
                .or(reason)
                .map(str::to_string),
        };
        self.store
            .apply_status(&insight.id, insight.status, status, Some(entry))
            .await?;

        info!(
            insight_id = %insight.id,
            from = %insight.status,
            to = %status,
            "insight status changed"
        );
        Ok(())
    }
}

fn validate_actor(actor: &Actor) -> Result<(), CoreError> {
    if actor.is_identified() {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "insight status changes require a user id or source id".to_string(),
        ))
    }
}
