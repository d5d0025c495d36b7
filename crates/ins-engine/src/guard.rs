//! Status transition guard.
//!
//! Decides what a requested status change actually does. The rules apply in
//! order:
//!
//! 1. current `deleted` → accepted, nothing happens
//! 2. requested `deleted` → accepted from any other status
//! 3. `ignored → ignored` → re-derived from the latest occurrence
//! 4. the transition table in [`InsightStatus::allowed_next_states`]
//!    (bypassed for the trusted source)
//! 5. leaving `in_progress` is rejected while work is open
//!    (the trusted source gets `ready_to_resolve` instead)
//! 6. requested == current → accepted, no log entry
//! 7. everything else → accepted, one log entry

use ins_core::entities::Occurrence;
use ins_core::enums::InsightStatus;
use ins_core::errors::CoreError;

/// Facts about one status change request.
#[derive(Debug, Clone, Copy)]
pub struct TransitionInput<'a> {
    pub insight_id: &'a str,
    pub current: InsightStatus,
    pub requested: InsightStatus,
    /// The request came from the configured trusted source.
    pub trusted_source: bool,
}

/// Outcome of an accepted status change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The insight was already deleted. Nothing is written.
    AlreadyDeleted,
    /// The insight becomes deleted. One log entry is written.
    Deleted { from: InsightStatus },
    /// The status does not change. Nothing is written.
    Unchanged { status: InsightStatus },
    /// The status changes. One log entry is written.
    Changed {
        from: InsightStatus,
        to: InsightStatus,
        /// Reason derived by the guard itself, overriding the caller's.
        reason: Option<String>,
    },
}

impl Decision {
    /// Whether the caller must append a status log entry.
    #[must_use]
    pub const fn appends_log(&self) -> bool {
        matches!(self, Self::Deleted { .. } | Self::Changed { .. })
    }

    /// Status the insight has after the decision is applied.
    #[must_use]
    pub const fn resulting_status(&self) -> InsightStatus {
        match self {
            Self::AlreadyDeleted | Self::Deleted { .. } => InsightStatus::Deleted,
            Self::Unchanged { status } => *status,
            Self::Changed { to, .. } => *to,
        }
    }

    /// Deleted outcomes are reported to the caller without a body.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        matches!(self, Self::AlreadyDeleted | Self::Deleted { .. })
    }

    #[must_use]
    pub fn derived_reason(&self) -> Option<&str> {
        match self {
            Self::Changed { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }
}

/// `ignored → ignored` is a refresh, not a no-op.
#[must_use]
pub fn is_ignored_refresh(current: InsightStatus, requested: InsightStatus) -> bool {
    current == InsightStatus::Ignored && requested == InsightStatus::Ignored
}

/// Whether [`decide`] will consult the open-work capability for this request.
///
/// Callers use this to skip the lookup when it cannot matter.
#[must_use]
pub fn requires_open_work(input: &TransitionInput<'_>) -> bool {
    if input.current != InsightStatus::InProgress {
        return false;
    }
    match input.requested {
        InsightStatus::InProgress | InsightStatus::Deleted => false,
        InsightStatus::Resolved => true,
        _ => !input.trusted_source,
    }
}

/// Decide the outcome of a status change request.
///
/// `latest` is the insight's most recent occurrence; it is only read for the
/// ignored refresh. `has_open_work` is only invoked when
/// [`requires_open_work`] holds.
///
/// # Errors
///
/// - `CoreError::InvalidTransition` when the table forbids the pair
/// - `CoreError::BlockedByOpenWork` when leaving `in_progress` with open work
/// - whatever `has_open_work` returns
pub fn decide<F>(
    input: &TransitionInput<'_>,
    latest: Option<&Occurrence>,
    has_open_work: F,
) -> Result<Decision, CoreError>
where
    F: FnOnce() -> Result<bool, CoreError>,
{
    let TransitionInput {
        insight_id,
        current,
        requested,
        trusted_source,
    } = *input;

    if current == InsightStatus::Deleted {
        return Ok(Decision::AlreadyDeleted);
    }
    if requested == InsightStatus::Deleted {
        return Ok(Decision::Deleted { from: current });
    }
    if is_ignored_refresh(current, requested) {
        return Ok(refresh_ignored(latest));
    }
    if current == requested {
        return Ok(Decision::Unchanged { status: current });
    }
    if !trusted_source && !current.can_transition_to(requested) {
        return Err(CoreError::InvalidTransition {
            entity_type: "insight".to_string(),
            id: insight_id.to_string(),
            from: current.to_string(),
            to: requested.to_string(),
        });
    }

    let mut resulting = requested;
    if requires_open_work(input) && has_open_work()? {
        if !trusted_source {
            return Err(CoreError::BlockedByOpenWork {
                entity_type: "insight".to_string(),
                id: insight_id.to_string(),
                from: current.to_string(),
                to: requested.to_string(),
            });
        }
        resulting = InsightStatus::ReadyToResolve;
    }

    Ok(Decision::Changed {
        from: current,
        to: resulting,
        reason: None,
    })
}

fn refresh_ignored(latest: Option<&Occurrence>) -> Decision {
    let Some(occurrence) = latest else {
        return Decision::Unchanged {
            status: InsightStatus::Ignored,
        };
    };
    let (to, action) = if occurrence.is_active_fault() {
        (InsightStatus::New, "reactivated")
    } else {
        (InsightStatus::Resolved, "resolved")
    };
    Decision::Changed {
        from: InsightStatus::Ignored,
        to,
        reason: Some(format!(
            "The system {action} this insight to bring it out of the Ignored state."
        )),
    }
}
