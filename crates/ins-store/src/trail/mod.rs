//! JSONL status-log trail writer and replayer.
//!
//! Every written status log entry is appended to
//! `{trail_dir}/{insight_id}.jsonl`; replaying those files over a freshly
//! loaded dataset restores the statuses and log entries written since.

pub mod replayer;
pub mod writer;

use serde::{Deserialize, Serialize};

use ins_core::entities::StatusLogEntry;

/// Current trail record version.
pub const TRAIL_VERSION: u32 = 1;

/// One line of a trail file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrailRecord {
    pub v: u32,
    #[serde(flatten)]
    pub entry: StatusLogEntry,
}

impl TrailRecord {
    #[must_use]
    pub const fn new(entry: StatusLogEntry) -> Self {
        Self {
            v: TRAIL_VERSION,
            entry,
        }
    }
}
