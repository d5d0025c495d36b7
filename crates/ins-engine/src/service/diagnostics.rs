//! Diagnostics over the dependency graph: snapshot and timeline.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use ins_core::errors::CoreError;
use ins_core::responses::{DiagnosticEntry, SnapshotEntry};

use crate::diagnostics::{DependencyGraph, snapshot_entry};
use crate::ports::{InsightStore, TicketStatistics, WorkOrderLookup};
use crate::service::InsightService;

impl<S> InsightService<S>
where
    S: InsightStore + WorkOrderLookup + TicketStatistics,
{
    /// Direct dependents of an insight with their latest fault start.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the root insight does not exist.
    pub async fn get_diagnostics_snapshot(
        &self,
        insight_id: &str,
    ) -> Result<Vec<SnapshotEntry>, CoreError> {
        self.require_insight(insight_id).await?;

        let mut entries = Vec::new();
        for dependency in self.store.dependencies(insight_id).await? {
            let target = &dependency.to_insight_id;
            if self.store.get_insight(target).await?.is_none() {
                warn!(from = insight_id, to = %target, "skipping dangling dependency edge");
                continue;
            }
            let occurrences = self.store.occurrences(target).await?;
            entries.push(snapshot_entry(&dependency, &occurrences));
        }
        Ok(entries)
    }

    /// Per-dependent occurrence timelines over a window.
    ///
    /// Each entry's timeline is built from its predecessor on the walked path.
    ///
    /// # Errors
    ///
    /// - `CoreError::Validation` if either window bound is missing
    /// - `CoreError::NotFound` if the root insight does not exist
    pub async fn get_diagnostic_timeline(
        &self,
        insight_id: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        interval: Option<&str>,
    ) -> Result<Vec<DiagnosticEntry>, CoreError> {
        let (Some(start), Some(end)) = (start, end) else {
            return Err(CoreError::Validation(
                "diagnostic timeline requires both start and end".to_string(),
            ));
        };
        self.require_insight(insight_id).await?;

        let graph = self.load_graph(insight_id).await?;
        Ok(graph.assemble_timeline(insight_id, start, end, interval, self.options.limits))
    }

    /// Load the part of the dependency graph a walk from `root_id` can reach.
    ///
    /// Mirrors the walk's breadth-first order and limits so no more is
    /// fetched than the walk will read.
    async fn load_graph(&self, root_id: &str) -> Result<DependencyGraph, CoreError> {
        let limits = self.options.limits;
        let max_nodes = usize::try_from(limits.max_visits).unwrap_or(usize::MAX);
        let mut graph = DependencyGraph::new();
        graph.add_node(root_id, self.store.occurrences(root_id).await?);

        let mut queue = VecDeque::from([(root_id.to_string(), 0_u32)]);
        while let Some((current, depth)) = queue.pop_front() {
            if depth >= limits.max_depth {
                continue;
            }
            for dependency in self.store.dependencies(&current).await? {
                let target = dependency.to_insight_id.as_str();
                if !graph.contains(target) {
                    if graph.node_count() >= max_nodes {
                        continue;
                    }
                    if self.store.get_insight(target).await?.is_none() {
                        warn!(from = %current, to = target, "skipping dangling dependency edge");
                        continue;
                    }
                    graph.add_node(target, self.store.occurrences(target).await?);
                    queue.push_back((target.to_string(), depth + 1));
                }
                graph.add_edge(&current, target, &dependency.relationship);
            }
        }

        debug!(root_id, nodes = graph.node_count(), "dependency graph loaded");
        Ok(graph)
    }
}
