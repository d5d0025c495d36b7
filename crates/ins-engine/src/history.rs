//! Status history analytics.
//!
//! Everything here is computed on read from the append-only status log; no
//! counter is ever stored.

use ins_core::entities::StatusLogEntry;
use ins_core::enums::InsightStatus;
use ins_core::responses::{HistorySummary, StatusHistoryEntry};

/// Count how often the insight was previously resolved / ignored.
///
/// The entry for the current status does not count as "previously".
#[must_use]
pub fn summarize(history: &[StatusLogEntry], current: InsightStatus) -> HistorySummary {
    HistorySummary {
        previously_resolved: previous_count(history, current, InsightStatus::Resolved),
        previously_ignored: previous_count(history, current, InsightStatus::Ignored),
    }
}

fn previous_count(history: &[StatusLogEntry], current: InsightStatus, status: InsightStatus) -> u32 {
    let total = count_status(history, status);
    if current == status {
        total.saturating_sub(1)
    } else {
        total
    }
}

fn count_status(history: &[StatusLogEntry], status: InsightStatus) -> u32 {
    let count = history.iter().filter(|entry| entry.status == status).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Whether the status ever appears in the history.
#[must_use]
pub fn has_status(history: &[StatusLogEntry], status: InsightStatus) -> bool {
    history.iter().any(|entry| entry.status == status)
}

/// Order the history most-recent-first and attach the recurrence flags.
///
/// With N resolved entries in the history, the N most recent rows carry
/// `previously_resolved`; the ignored flag is computed the same way. Rows with
/// equal timestamps keep the later-appended one first.
#[must_use]
pub fn annotate(history: &[StatusLogEntry]) -> Vec<StatusHistoryEntry> {
    let resolved = history
        .iter()
        .filter(|entry| entry.status == InsightStatus::Resolved)
        .count();
    let ignored = history
        .iter()
        .filter(|entry| entry.status == InsightStatus::Ignored)
        .count();

    let mut ordered: Vec<&StatusLogEntry> = history.iter().collect();
    ordered.sort_by_key(|entry| entry.created_at);
    ordered.reverse();

    ordered
        .into_iter()
        .enumerate()
        .map(|(rank, entry)| StatusHistoryEntry {
            id: entry.id.clone(),
            status: entry.status,
            created_at: entry.created_at,
            user_id: entry.user_id.clone(),
            source_type: entry.source_type,
            source_id: entry.source_id.clone(),
            reason: entry.reason.clone(),
            previously_resolved: rank < resolved,
            previously_ignored: rank < ignored,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use ins_core::enums::SourceType;
    use pretty_assertions::assert_eq;

    use InsightStatus::{Ignored, InProgress, New, Resolved};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 10, 19, hour, 0, 0).unwrap()
    }

    fn entry(id: &str, status: InsightStatus, hour: u32) -> StatusLogEntry {
        StatusLogEntry {
            id: id.into(),
            insight_id: "ins-00000001".into(),
            status,
            created_at: at(hour),
            user_id: Some("usr-1".into()),
            source_type: SourceType::User,
            source_id: None,
            reason: None,
        }
    }

    fn history(statuses: &[InsightStatus]) -> Vec<StatusLogEntry> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| entry(&format!("log-{i}"), *status, u32::try_from(i).unwrap()))
            .collect()
    }

    #[test]
    fn current_status_is_not_counted_as_previous() {
        let log = history(&[New, Resolved, New, Resolved]);
        let summary = summarize(&log, Resolved);
        assert_eq!(summary.previously_resolved, 1);
        assert_eq!(summary.previously_ignored, 0);
    }

    #[test]
    fn counters_are_independent() {
        let log = history(&[New, Ignored, New, Resolved, New]);
        let summary = summarize(&log, New);
        assert_eq!(
            summary,
            HistorySummary {
                previously_resolved: 1,
                previously_ignored: 1
            }
        );
    }

    #[test]
    fn counters_clamp_at_zero() {
        let summary = summarize(&[], Ignored);
        assert_eq!(summary, HistorySummary::default());
    }

    #[test]
    fn ignored_counter_excludes_current_ignored() {
        let log = history(&[New, Ignored, New, Ignored]);
        assert_eq!(summarize(&log, Ignored).previously_ignored, 1);
        assert_eq!(summarize(&log, New).previously_ignored, 2);
    }

    #[test]
    fn annotate_orders_most_recent_first() {
        let log = history(&[New, InProgress, Resolved]);
        let annotated = annotate(&log);
        let ids: Vec<&str> = annotated.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["log-2", "log-1", "log-0"]);
    }

    #[test]
    fn flags_mark_the_n_most_recent_rows() {
        let log = history(&[New, Resolved, New, Resolved, New]);
        let annotated = annotate(&log);
        let flags: Vec<bool> = annotated.iter().map(|e| e.previously_resolved).collect();
        assert_eq!(flags, vec![true, true, false, false, false]);
        assert!(annotated.iter().all(|e| !e.previously_ignored));
    }

    #[test]
    fn single_match_flags_only_the_most_recent_row() {
        let log = history(&[New, Ignored, New]);
        let annotated = annotate(&log);
        let flags: Vec<bool> = annotated.iter().map(|e| e.previously_ignored).collect();
        assert_eq!(flags, vec![true, false, false]);
    }

    #[test]
    fn equal_timestamps_keep_later_append_first() {
        let log = vec![entry("log-a", New, 3), entry("log-b", Resolved, 3)];
        let annotated = annotate(&log);
        assert_eq!(annotated[0].id, "log-b");
        assert_eq!(annotated[1].id, "log-a");
    }

    #[test]
    fn has_status_scans_whole_history() {
        let log = history(&[New, Ignored, New]);
        assert!(has_status(&log, Ignored));
        assert!(!has_status(&log, Resolved));
    }
}
