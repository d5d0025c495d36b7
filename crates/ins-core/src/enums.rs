//! Status enums, lifecycle states, source types, and activity facets.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `InsightStatus` carries the lifecycle transition table in
//! `allowed_next_states()`; the guard in `ins-engine` layers the cross-aggregate
//! rules (Deleted, Ignored refresh, open work) on top of it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// InsightStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of an insight.
///
/// ```text
/// new / open → new, open, in_progress, ignored, deleted
/// in_progress → in_progress, resolved            (blocked by open work)
/// resolved → new, resolved
/// ignored → new, deleted                         (ignored → ignored re-derives)
/// ready_to_resolve → any
/// deleted → (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InsightStatus {
    New,
    Open,
    InProgress,
    Resolved,
    Ignored,
    ReadyToResolve,
    Deleted,
}

impl InsightStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::New,
        Self::Open,
        Self::InProgress,
        Self::Resolved,
        Self::Ignored,
        Self::ReadyToResolve,
        Self::Deleted,
    ];

    /// Statuses a user may request from the current one.
    ///
    /// `Ignored → Ignored` is deliberately absent: it is a refresh whose
    /// outcome is derived from the latest occurrence, not a table lookup.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::New | Self::Open => &[
                Self::New,
                Self::Open,
                Self::InProgress,
                Self::Ignored,
                Self::Deleted,
            ],
            Self::InProgress => &[Self::InProgress, Self::Resolved],
            Self::Resolved => &[Self::New, Self::Resolved],
            Self::Ignored => &[Self::New, Self::Deleted],
            Self::ReadyToResolve => &Self::ALL,
            Self::Deleted => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed by the table.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Ignored => "ignored",
            Self::ReadyToResolve => "ready_to_resolve",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for InsightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InsightStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown insight status '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// InsightState
// ---------------------------------------------------------------------------

/// Record state of an insight, orthogonal to its lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InsightState {
    Active,
    Archived,
    Inactive,
}

impl InsightState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for InsightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SourceType
// ---------------------------------------------------------------------------

/// Who produced a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    User,
    App,
    RulesEngine,
}

impl SourceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::App => "app",
            Self::RulesEngine => "rules_engine",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActivityFacet
// ---------------------------------------------------------------------------

/// Activity filter facet offered for a set of insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityFacet {
    Tickets,
    PreviouslyResolved,
    PreviouslyIgnored,
    Reported,
}

impl ActivityFacet {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tickets => "tickets",
            Self::PreviouslyResolved => "previously_resolved",
            Self::PreviouslyIgnored => "previously_ignored",
            Self::Reported => "reported",
        }
    }
}

impl fmt::Display for ActivityFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(
        status_in_progress,
        InsightStatus,
        InsightStatus::InProgress,
        "in_progress"
    );
    test_serde_roundtrip!(
        status_ready_to_resolve,
        InsightStatus,
        InsightStatus::ReadyToResolve,
        "ready_to_resolve"
    );
    test_serde_roundtrip!(state_archived, InsightState, InsightState::Archived, "archived");
    test_serde_roundtrip!(
        source_rules_engine,
        SourceType,
        SourceType::RulesEngine,
        "rules_engine"
    );
    test_serde_roundtrip!(
        facet_previously_ignored,
        ActivityFacet,
        ActivityFacet::PreviouslyIgnored,
        "previously_ignored"
    );

    // --- Transition table tests ---

    #[test]
    fn new_and_open_share_a_row() {
        assert_eq!(
            InsightStatus::New.allowed_next_states(),
            InsightStatus::Open.allowed_next_states()
        );
        assert!(InsightStatus::New.can_transition_to(InsightStatus::InProgress));
        assert!(InsightStatus::Open.can_transition_to(InsightStatus::Ignored));
    }

    #[test]
    fn resolved_only_reopens_as_new() {
        assert!(InsightStatus::Resolved.can_transition_to(InsightStatus::New));
        assert!(!InsightStatus::Resolved.can_transition_to(InsightStatus::Open));
        assert!(!InsightStatus::Resolved.can_transition_to(InsightStatus::InProgress));
        assert!(!InsightStatus::Resolved.can_transition_to(InsightStatus::Ignored));
    }

    #[test]
    fn ignored_refresh_is_not_in_the_table() {
        assert!(!InsightStatus::Ignored.can_transition_to(InsightStatus::Ignored));
        assert!(InsightStatus::Ignored.can_transition_to(InsightStatus::New));
    }

    #[test]
    fn ready_to_resolve_is_unrestricted() {
        for next in InsightStatus::ALL {
            assert!(InsightStatus::ReadyToResolve.can_transition_to(next));
        }
    }

    #[test]
    fn deleted_is_terminal() {
        assert!(InsightStatus::Deleted.allowed_next_states().is_empty());
    }

    #[test]
    fn from_str_matches_as_str() {
        for status in InsightStatus::ALL {
            assert_eq!(status.as_str().parse::<InsightStatus>(), Ok(status));
        }
        assert!("closed".parse::<InsightStatus>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", InsightStatus::ReadyToResolve), "ready_to_resolve");
        assert_eq!(format!("{}", InsightState::Inactive), "inactive");
        assert_eq!(format!("{}", SourceType::App), "app");
        assert_eq!(format!("{}", ActivityFacet::Tickets), "tickets");
    }
}
