//! Cross-cutting error types for the insight engine.
//!
//! This module defines errors that can originate from any crate in the system.
//! Store and configuration errors live in their own crates and convert into
//! `CoreError` at the service boundary; the CLI converges everything on
//! `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any `ins-*` crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// A transition out of `in_progress` was attempted while work is still open.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}, because it has open work")]
    BlockedByOpenWork {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// The stored status changed between the decision and the write.
    #[error("Conflicting update: {entity_type} {id} expected {expected}, found {actual}")]
    Conflict {
        entity_type: String,
        id: String,
        expected: String,
        actual: String,
    },

    /// Data failed validation (missing identity, missing window bound, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// An external collaborator (store, work-order lookup, ticket statistics) failed.
    #[error("Collaborator '{collaborator}' failed: {message}")]
    Collaborator {
        collaborator: String,
        message: String,
    },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a missing insight.
    #[must_use]
    pub fn insight_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "insight".to_string(),
            id: id.to_string(),
        }
    }

    /// Whether the caller can fix the request (4xx-class) rather than the system failing.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::InvalidTransition { .. }
                | Self::BlockedByOpenWork { .. }
                | Self::Conflict { .. }
                | Self::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_errors_are_client_errors() {
        let err = CoreError::InvalidTransition {
            entity_type: "insight".into(),
            id: "ins-1".into(),
            from: "resolved".into(),
            to: "open".into(),
        };
        assert!(err.is_client_error());
        assert_eq!(
            err.to_string(),
            "Invalid state transition: insight ins-1 from resolved to open"
        );
    }

    #[test]
    fn conflicts_are_client_errors() {
        let err = CoreError::Conflict {
            entity_type: "insight".into(),
            id: "ins-1".into(),
            expected: "open".into(),
            actual: "deleted".into(),
        };
        assert!(err.is_client_error());
        assert_eq!(
            err.to_string(),
            "Conflicting update: insight ins-1 expected open, found deleted"
        );
    }

    #[test]
    fn collaborator_failures_are_not_client_errors() {
        let err = CoreError::Collaborator {
            collaborator: "work_orders".into(),
            message: "timeout".into(),
        };
        assert!(!err.is_client_error());
    }
}
