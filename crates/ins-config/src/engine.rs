//! Lifecycle and diagnostics engine configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default depth ceiling for the dependency-graph walk.
const fn default_max_graph_depth() -> u32 {
    4
}

/// Default ceiling on nodes visited by one dependency-graph walk.
const fn default_max_graph_visits() -> u32 {
    256
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Nodes deeper than this are not expanded.
    #[serde(default = "default_max_graph_depth")]
    pub max_graph_depth: u32,

    /// The walk stops once this many nodes have been visited.
    #[serde(default = "default_max_graph_visits")]
    pub max_graph_visits: u32,

    /// Source id whose requests bypass the transition table. Empty means none.
    #[serde(default)]
    pub trusted_source_id: String,
}

impl EngineConfig {
    /// The trusted source id, if one is configured.
    #[must_use]
    pub fn trusted_source(&self) -> Option<&str> {
        let trimmed = self.trusted_source_id.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Reject limits that would make every walk empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_graph_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.max_graph_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_graph_visits == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.max_graph_visits".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_graph_depth: default_max_graph_depth(),
            max_graph_visits: default_max_graph_visits(),
            trusted_source_id: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = EngineConfig::default();
        assert_eq!(config.max_graph_depth, 4);
        assert_eq!(config.max_graph_visits, 256);
        assert_eq!(config.trusted_source(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_trusted_source_is_none() {
        let config = EngineConfig {
            trusted_source_id: "  ".into(),
            ..EngineConfig::default()
        };
        assert_eq!(config.trusted_source(), None);
    }

    #[test]
    fn zero_depth_is_rejected() {
        let config = EngineConfig {
            max_graph_depth: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "engine.max_graph_depth"
        ));
    }
}
