//! Replays trail files over a loaded dataset.

use std::path::Path;

use tracing::{debug, warn};

use crate::dataset::Dataset;
use crate::error::StoreError;
use crate::trail::{TRAIL_VERSION, TrailRecord};

/// Counts from one replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub trail_files: u32,
    pub entries_replayed: u32,
    pub entries_skipped: u32,
}

pub struct TrailReplayer;

impl TrailReplayer {
    /// Apply every trail record under `trail_dir` to `dataset`, oldest first.
    ///
    /// Records whose log entry id is already present, or whose insight is
    /// unknown, are skipped. A missing directory replays nothing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a trail file cannot be read or parsed, or
    /// carries an unsupported version.
    pub fn replay(dataset: &mut Dataset, trail_dir: &Path) -> Result<ReplayReport, StoreError> {
        let mut report = ReplayReport::default();
        if !trail_dir.is_dir() {
            debug!(trail_dir = %trail_dir.display(), "no trail directory, nothing to replay");
            return Ok(report);
        }

        let mut records: Vec<TrailRecord> = Vec::new();
        for dir_entry in std::fs::read_dir(trail_dir)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("jsonl") {
                continue;
            }
            report.trail_files += 1;

            let file_records: Vec<TrailRecord> =
                serde_jsonlines::json_lines(&path)?.collect::<Result<_, _>>()?;
            records.extend(file_records);
        }

        records.sort_by_key(|record| record.entry.created_at);

        for record in records {
            if record.v != TRAIL_VERSION {
                return Err(StoreError::InvalidState(format!(
                    "Unsupported trail version {} for entry {}",
                    record.v, record.entry.id
                )));
            }
            if dataset.has_status_log(&record.entry.id) {
                report.entries_skipped += 1;
                continue;
            }
            let Some(insight) = dataset.insight_mut(&record.entry.insight_id) else {
                warn!(
                    insight_id = %record.entry.insight_id,
                    entry_id = %record.entry.id,
                    "trail entry for unknown insight skipped"
                );
                report.entries_skipped += 1;
                continue;
            };
            insight.status = record.entry.status;
            insight.updated_at = record.entry.created_at;
            dataset.status_logs.push(record.entry);
            report.entries_replayed += 1;
        }

        debug!(
            trail_files = report.trail_files,
            replayed = report.entries_replayed,
            skipped = report.entries_skipped,
            "trail replayed"
        );
        Ok(report)
    }
}
