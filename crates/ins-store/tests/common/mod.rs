//! Shared fixtures for ins-store integration tests.
#![allow(dead_code)]

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use ins_core::entities::{Actor, Dependency, Insight, Occurrence, StatusLogEntry};
use ins_core::enums::{InsightState, InsightStatus, SourceType};
use ins_core::responses::TicketStatistic;
use ins_engine::{InsightService, ServiceOptions};
use ins_store::{Dataset, MemoryStore};

pub const TRUSTED_SOURCE: &str = "rules-engine";

/// Diagnostics window start.
pub fn window_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 19, 0, 0, 0).unwrap()
}

/// Diagnostics window end.
pub fn window_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 11, 3, 0, 0, 0).unwrap()
}

pub fn insight(id: &str, status: InsightStatus) -> Insight {
    Insight {
        id: id.into(),
        site_id: "site-1".into(),
        twin_id: Some(format!("twin-{id}")),
        rule_id: "rule-1".into(),
        name: format!("Insight {id}"),
        status,
        state: InsightState::Active,
        priority: 2,
        reported: false,
        created_at: window_start() - TimeDelta::days(30),
        last_occurred_at: None,
        updated_at: window_start() - TimeDelta::days(30),
    }
}

pub fn occurrence(
    insight_id: &str,
    started: DateTime<Utc>,
    ended: DateTime<Utc>,
    is_faulted: bool,
    is_valid: bool,
) -> Occurrence {
    Occurrence {
        insight_id: insight_id.into(),
        started,
        ended,
        is_faulted,
        is_valid,
    }
}

pub fn log_entry(id: &str, insight_id: &str, status: InsightStatus, days_ago: i64) -> StatusLogEntry {
    StatusLogEntry {
        id: id.into(),
        insight_id: insight_id.into(),
        status,
        created_at: window_start() - TimeDelta::days(days_ago),
        user_id: Some("usr-seed".into()),
        source_type: SourceType::User,
        source_id: None,
        reason: None,
    }
}

fn edge(from: &str, to: &str, relationship: &str) -> Dependency {
    Dependency {
        from_insight_id: from.into(),
        to_insight_id: to.into(),
        relationship: relationship.into(),
    }
}

/// Lifecycle insights plus a small cyclic dependency graph:
/// `ins-root → ins-a → ins-b → ins-root`, and a dangling `ins-root → ins-gone`.
pub fn fixture() -> Dataset {
    let start = window_start();
    let mut reported = insight("ins-reported", InsightStatus::Open);
    reported.reported = true;

    Dataset {
        insights: vec![
            insight("ins-new", InsightStatus::New),
            insight("ins-open", InsightStatus::Open),
            insight("ins-progress", InsightStatus::InProgress),
            insight("ins-blocked", InsightStatus::InProgress),
            insight("ins-resolved", InsightStatus::Resolved),
            insight("ins-ignored-fault", InsightStatus::Ignored),
            insight("ins-ignored-clear", InsightStatus::Ignored),
            insight("ins-ignored-quiet", InsightStatus::Ignored),
            insight("ins-deleted", InsightStatus::Deleted),
            reported,
            insight("ins-root", InsightStatus::Open),
            insight("ins-a", InsightStatus::Open),
            insight("ins-b", InsightStatus::New),
        ],
        occurrences: vec![
            // ignored-fault: older clear occurrence, latest is a valid fault
            occurrence("ins-ignored-fault", start - TimeDelta::days(10), start - TimeDelta::days(9), false, true),
            occurrence("ins-ignored-fault", start - TimeDelta::days(2), start - TimeDelta::days(1), true, true),
            // ignored-clear: latest is faulted but invalid
            occurrence("ins-ignored-clear", start - TimeDelta::days(2), start - TimeDelta::days(1), true, false),
            // graph
            occurrence("ins-root", start - TimeDelta::days(5), start + TimeDelta::days(3), true, true),
            occurrence("ins-a", start + TimeDelta::days(4), start + TimeDelta::days(5), false, true),
            occurrence("ins-a", start + TimeDelta::days(1), start + TimeDelta::days(2), true, true),
            occurrence("ins-a", start + TimeDelta::days(6), start + TimeDelta::days(7), true, true),
        ],
        status_logs: vec![
            log_entry("log-r1", "ins-resolved", InsightStatus::Resolved, 20),
            log_entry("log-r2", "ins-resolved", InsightStatus::New, 10),
            log_entry("log-r3", "ins-resolved", InsightStatus::Resolved, 5),
            log_entry("log-i1", "ins-ignored-fault", InsightStatus::Ignored, 15),
        ],
        dependencies: vec![
            edge("ins-root", "ins-a", "is_caused_by"),
            edge("ins-root", "ins-gone", "is_caused_by"),
            edge("ins-a", "ins-b", "relates_to"),
            edge("ins-b", "ins-root", "relates_to"),
        ],
        open_work: vec!["ins-blocked".into()],
        ticket_statistics: vec![TicketStatistic {
            insight_id: "ins-open".into(),
            open_count: 1,
            total_count: 3,
        }],
    }
}

pub fn test_service() -> InsightService<MemoryStore> {
    test_service_with(ServiceOptions::default())
}

pub fn test_service_with(options: ServiceOptions) -> InsightService<MemoryStore> {
    InsightService::new(MemoryStore::new(fixture()), options)
}

pub fn trusted_options() -> ServiceOptions {
    ServiceOptions {
        trusted_source_id: Some(TRUSTED_SOURCE.into()),
        ..ServiceOptions::default()
    }
}

pub fn user() -> Actor {
    Actor::user("usr-1")
}

pub fn rules_engine() -> Actor {
    Actor::app(SourceType::RulesEngine, TRUSTED_SOURCE)
}
