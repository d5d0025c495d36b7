//! JSONL trail writer.
//!
//! Appends `TrailRecord`s to per-insight `{trail_dir}/{insight_id}.jsonl`
//! files. Uses `serde_jsonlines::append_json_lines` for per-line appends.

use std::path::{Path, PathBuf};

use ins_core::entities::StatusLogEntry;

use crate::error::StoreError;
use crate::trail::TrailRecord;

/// Appends status log entries to per-insight JSONL files.
#[derive(Debug)]
pub struct TrailWriter {
    trail_dir: PathBuf,
    enabled: bool,
}

impl TrailWriter {
    /// Create a writer pointing at the given directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn new(trail_dir: PathBuf) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&trail_dir)?;
        Ok(Self {
            trail_dir,
            enabled: true,
        })
    }

    /// Create a disabled writer (for tests or when the trail is turned off).
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            trail_dir: PathBuf::new(),
            enabled: false,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append one entry to its insight's trail file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidState` if the insight id cannot name a trail
    /// file, or `StoreError::Io` if the file write fails.
    pub fn append(&self, entry: &StatusLogEntry) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }

        let path = self.path_for(&entry.insight_id)?;
        serde_jsonlines::append_json_lines(&path, [TrailRecord::new(entry.clone())])?;
        Ok(())
    }

    /// The trail file of one insight, always directly inside the trail directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidState` for an empty id or one containing a
    /// path separator.
    pub fn path_for(&self, insight_id: &str) -> Result<PathBuf, StoreError> {
        if insight_id.is_empty() || insight_id.contains(['/', '\\', '\0']) {
            return Err(StoreError::InvalidState(format!(
                "insight id '{}' cannot name a trail file",
                insight_id.escape_default()
            )));
        }
        Ok(self.trail_dir.join(format!("{insight_id}.jsonl")))
    }

    #[must_use]
    pub fn trail_dir(&self) -> &Path {
        &self.trail_dir
    }
}
