//! Store error types for ins-store.

use ins_core::errors::CoreError;
use thiserror::Error;

/// Errors from loading, persisting, or replaying store state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset or trail contents are not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid state encountered (e.g., unsupported trail version).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<StoreError> for CoreError {
    fn from(error: StoreError) -> Self {
        Self::Collaborator {
            collaborator: "insight_store".to_string(),
            message: error.to_string(),
        }
    }
}
