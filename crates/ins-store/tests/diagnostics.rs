//! Diagnostics snapshot and timeline over the fixture graph.

mod common;

use chrono::TimeDelta;
use common::*;
use ins_core::errors::CoreError;
use ins_engine::{ServiceOptions, WalkLimits};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[tokio::test]
async fn snapshot_lists_direct_dependents_with_latest_fault() {
    let svc = test_service();
    let entries = svc.get_diagnostics_snapshot("ins-root").await.unwrap();

    // the dangling ins-gone edge is skipped
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].insight_id, "ins-a");
    assert_eq!(entries[0].relationship, "is_caused_by");
    assert_eq!(
        entries[0].reference_timestamp,
        Some(window_start() + TimeDelta::days(6))
    );
}

#[tokio::test]
async fn snapshot_of_dependent_without_faults_has_no_reference() {
    let svc = test_service();
    let entries = svc.get_diagnostics_snapshot("ins-a").await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].insight_id, "ins-b");
    assert_eq!(entries[0].reference_timestamp, None);
}

#[tokio::test]
async fn snapshot_without_edges_is_empty() {
    let svc = test_service();
    assert!(svc.get_diagnostics_snapshot("ins-new").await.unwrap().is_empty());
}

#[tokio::test]
async fn snapshot_of_unknown_root_is_not_found() {
    let svc = test_service();
    assert!(matches!(
        svc.get_diagnostics_snapshot("ins-nope").await,
        Err(CoreError::NotFound { .. })
    ));
}

#[rstest]
#[case(None, Some(window_end()))]
#[case(Some(window_start()), None)]
#[case(None, None)]
#[tokio::test]
async fn timeline_requires_both_bounds(
    #[case] start: Option<chrono::DateTime<chrono::Utc>>,
    #[case] end: Option<chrono::DateTime<chrono::Utc>>,
) {
    let svc = test_service();
    let result = svc
        .get_diagnostic_timeline("ins-root", start, end, None)
        .await;
    assert!(matches!(result, Err(CoreError::Validation(_))));
}

#[tokio::test]
async fn timeline_of_unknown_root_is_not_found() {
    let svc = test_service();
    let result = svc
        .get_diagnostic_timeline("ins-nope", Some(window_start()), Some(window_end()), None)
        .await;
    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

#[tokio::test]
async fn timeline_entries_use_predecessor_occurrences() {
    let svc = test_service();
    let entries = svc
        .get_diagnostic_timeline(
            "ins-root",
            Some(window_start()),
            Some(window_end()),
            Some("00.10:00:00"),
        )
        .await
        .unwrap();

    let walked: Vec<(&str, &str, u32)> = entries
        .iter()
        .map(|e| (e.insight_id.as_str(), e.baseline_insight_id.as_str(), e.depth))
        .collect();
    assert_eq!(walked, vec![("ins-a", "ins-root", 1), ("ins-b", "ins-a", 2)]);

    // ins-root fault clipped to 72h inside the window, split by 10h
    let root_based = &entries[0].timeline;
    assert_eq!(root_based.len(), 8);
    assert_eq!(root_based[0].start, window_start());
    assert_eq!(root_based[7].end, window_start() + TimeDelta::hours(80));
    assert!(root_based.iter().all(|span| span.is_faulty));

    // ins-a has three one-day occurrences, ordered by start: 3 x ceil(24/10)
    let a_based = &entries[1].timeline;
    assert_eq!(a_based.len(), 9);
    assert_eq!(a_based[0].start, window_start() + TimeDelta::days(1));
    assert!(a_based[0].is_faulty);
    assert!(!a_based[3].is_faulty);
    assert!(a_based[6].is_faulty);
}

#[tokio::test]
async fn inverted_window_is_used_verbatim() {
    let svc = test_service();
    let entries = svc
        .get_diagnostic_timeline("ins-root", Some(window_end()), Some(window_start()), None)
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.timeline.is_empty()));
}

#[tokio::test]
async fn walk_depth_comes_from_options() {
    let svc = test_service_with(ServiceOptions {
        limits: WalkLimits {
            max_depth: 1,
            max_visits: 256,
        },
        trusted_source_id: None,
    });
    let entries = svc
        .get_diagnostic_timeline("ins-root", Some(window_start()), Some(window_end()), None)
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].insight_id, "ins-a");
}
