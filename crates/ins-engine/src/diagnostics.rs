//! Dependency-graph diagnostics.
//!
//! The graph is an arena: nodes live in a `Vec`, edges point at node indices,
//! and a `HashMap` maps insight ids to indices. Walks keep a `Vec<bool>`
//! visited set, so cycles terminate.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use ins_config::EngineConfig;
use ins_core::entities::{Dependency, Occurrence};
use ins_core::responses::{DiagnosticEntry, SnapshotEntry, TimelineSpan};
use tracing::debug;

use crate::timeline::OccurrenceTimeline;

/// Ceilings applied to one dependency-graph walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkLimits {
    /// Nodes at this depth are reported but not expanded.
    pub max_depth: u32,
    /// The walk stops once this many nodes (root included) have been visited.
    pub max_visits: u32,
}

impl Default for WalkLimits {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for WalkLimits {
    fn from(config: &EngineConfig) -> Self {
        Self {
            max_depth: config.max_graph_depth,
            max_visits: config.max_graph_visits,
        }
    }
}

#[derive(Debug, Clone)]
struct Edge {
    target: usize,
    relationship: String,
}

#[derive(Debug, Clone)]
struct Node {
    insight_id: String,
    occurrences: Vec<Occurrence>,
    edges: Vec<Edge>,
}

/// Arena-backed directed graph of insights and their occurrences.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl DependencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its index. Adding an existing id keeps the first.
    pub fn add_node(&mut self, insight_id: &str, occurrences: Vec<Occurrence>) -> usize {
        if let Some(&idx) = self.index.get(insight_id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(Node {
            insight_id: insight_id.to_string(),
            occurrences,
            edges: Vec::new(),
        });
        self.index.insert(insight_id.to_string(), idx);
        idx
    }

    /// Add an edge between two known nodes. Returns `false` if either is unknown.
    pub fn add_edge(&mut self, from: &str, to: &str, relationship: &str) -> bool {
        let (Some(&source), Some(&target)) = (self.index.get(from), self.index.get(to)) else {
            return false;
        };
        self.nodes[source].edges.push(Edge {
            target,
            relationship: relationship.to_string(),
        });
        true
    }

    #[must_use]
    pub fn contains(&self, insight_id: &str) -> bool {
        self.index.contains_key(insight_id)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Breadth-first walk from `root_id`.
    ///
    /// Every newly reached node yields one entry whose timeline is built from
    /// the occurrences of the node it was reached from. The first path to a
    /// node wins; later paths are ignored.
    #[must_use]
    pub fn assemble_timeline(
        &self,
        root_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        requested_interval: Option<&str>,
        limits: WalkLimits,
    ) -> Vec<DiagnosticEntry> {
        let Some(&root) = self.index.get(root_id) else {
            return Vec::new();
        };

        let mut entries = Vec::new();
        let mut visited = vec![false; self.nodes.len()];
        let mut queue = VecDeque::from([(root, 0_u32)]);
        visited[root] = true;
        let mut visits = 1_u32;

        'walk: while let Some((current, depth)) = queue.pop_front() {
            let node = &self.nodes[current];
            if node.edges.is_empty() {
                continue;
            }
            if depth >= limits.max_depth {
                debug!(insight_id = %node.insight_id, depth, "walk depth limit reached");
                continue;
            }

            let baseline: Vec<TimelineSpan> =
                OccurrenceTimeline::build(&node.occurrences, start, end, requested_interval)
                    .iter()
                    .collect();

            for edge in &node.edges {
                if visited[edge.target] {
                    continue;
                }
                if visits >= limits.max_visits {
                    debug!(root_id, visits, "walk visit limit reached");
                    break 'walk;
                }
                visited[edge.target] = true;
                visits += 1;

                entries.push(DiagnosticEntry {
                    insight_id: self.nodes[edge.target].insight_id.clone(),
                    baseline_insight_id: node.insight_id.clone(),
                    relationship: edge.relationship.clone(),
                    depth: depth + 1,
                    timeline: baseline.clone(),
                });
                queue.push_back((edge.target, depth + 1));
            }
        }

        debug!(root_id, entries = entries.len(), "dependency walk finished");
        entries
    }
}

/// Snapshot entry for one direct dependent.
///
/// The reference timestamp is the start of the dependent's most recent
/// faulted occurrence.
#[must_use]
pub fn snapshot_entry(dependency: &Dependency, occurrences: &[Occurrence]) -> SnapshotEntry {
    SnapshotEntry {
        insight_id: dependency.to_insight_id.clone(),
        relationship: dependency.relationship.clone(),
        reference_timestamp: occurrences
            .iter()
            .filter(|occurrence| occurrence.is_faulted)
            .map(|occurrence| occurrence.started)
            .max(),
    }
}
