//! Dataset and status-log trail locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_dataset_path() -> String {
    ".insight/dataset.json".to_string()
}

fn default_trail_dir() -> String {
    ".insight/trail".to_string()
}

const fn default_trail_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// JSON dataset the in-memory store is seeded from.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Directory holding one `{insight_id}.jsonl` status-log trail per insight.
    #[serde(default = "default_trail_dir")]
    pub trail_dir: String,

    /// Whether written status log entries are appended to the trail.
    #[serde(default = "default_trail_enabled")]
    pub trail_enabled: bool,
}

impl StoreConfig {
    #[must_use]
    pub fn dataset_path(&self) -> PathBuf {
        PathBuf::from(&self.dataset_path)
    }

    #[must_use]
    pub fn trail_dir(&self) -> PathBuf {
        PathBuf::from(&self.trail_dir)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            trail_dir: default_trail_dir(),
            trail_enabled: default_trail_enabled(),
        }
    }
}
