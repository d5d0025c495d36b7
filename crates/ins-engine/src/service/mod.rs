//! Service layer orchestrating the engine components over the collaborator ports.
//!
//! `InsightService` owns a store implementing all three ports plus the
//! options derived from `EngineConfig`. Operations are implemented as
//! `impl InsightService` blocks split by concern:
//! - `status`: single and batch status changes
//! - `queries`: insight view, status history, activity facets
//! - `diagnostics`: snapshot and timeline over the dependency graph

mod diagnostics;
mod queries;
mod status;

use ins_config::EngineConfig;
use ins_core::entities::{Actor, Insight};
use ins_core::enums::InsightStatus;
use ins_core::errors::CoreError;

use crate::diagnostics::WalkLimits;
use crate::ports::{InsightStore, TicketStatistics, WorkOrderLookup};

/// Knobs the service reads on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceOptions {
    pub limits: WalkLimits,
    /// Requests from this source id bypass the transition table.
    pub trusted_source_id: Option<String>,
}

impl From<&EngineConfig> for ServiceOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            limits: WalkLimits::from(config),
            trusted_source_id: config.trusted_source().map(str::to_string),
        }
    }
}

/// Insight lifecycle and diagnostics operations.
pub struct InsightService<S> {
    store: S,
    options: ServiceOptions,
}

impl<S> InsightService<S>
where
    S: InsightStore + WorkOrderLookup + TicketStatistics,
{
    #[must_use]
    pub const fn new(store: S, options: ServiceOptions) -> Self {
        Self { store, options }
    }

    /// Access the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn options(&self) -> &ServiceOptions {
        &self.options
    }

    /// Fetch an insight or fail with `NotFound`.
    async fn require_insight(&self, insight_id: &str) -> Result<Insight, CoreError> {
        self.store
            .get_insight(insight_id)
            .await?
            .ok_or_else(|| CoreError::insight_not_found(insight_id))
    }

    /// Fetch an insight, treating deleted ones as missing.
    async fn require_live_insight(&self, insight_id: &str) -> Result<Insight, CoreError> {
        let insight = self.require_insight(insight_id).await?;
        if insight.status == InsightStatus::Deleted {
            return Err(CoreError::insight_not_found(insight_id));
        }
        Ok(insight)
    }

    fn is_trusted(&self, actor: &Actor) -> bool {
        match (&self.options.trusted_source_id, &actor.source_id) {
            (Some(trusted), Some(source)) => trusted == source,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_engine_config() {
        let config = EngineConfig {
            max_graph_depth: 2,
            max_graph_visits: 9,
            trusted_source_id: "rules-engine".into(),
        };
        let options = ServiceOptions::from(&config);
        assert_eq!(
            options.limits,
            WalkLimits {
                max_depth: 2,
                max_visits: 9
            }
        );
        assert_eq!(options.trusted_source_id.as_deref(), Some("rules-engine"));
    }

    #[test]
    fn default_options_trust_nobody() {
        let options = ServiceOptions::from(&EngineConfig::default());
        assert_eq!(options.trusted_source_id, None);
        assert_eq!(options, ServiceOptions::default());
    }
}
