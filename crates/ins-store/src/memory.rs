//! In-memory implementation of all three collaborator ports.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use ins_config::StoreConfig;
use ins_core::entities::{Dependency, Insight, Occurrence, StatusLogEntry};
use ins_core::enums::InsightStatus;
use ins_core::errors::CoreError;
use ins_core::responses::TicketStatistic;
use ins_engine::ports::{InsightStore, TicketStatistics, WorkOrderLookup};

use crate::dataset::Dataset;
use crate::error::StoreError;
use crate::trail::replayer::{ReplayReport, TrailReplayer};
use crate::trail::writer::TrailWriter;

/// Dataset-backed store. One write lock covers status and log together.
#[derive(Debug)]
pub struct MemoryStore {
    data: RwLock<Dataset>,
    trail: TrailWriter,
    ticket_statistics_offline: AtomicBool,
    work_orders_offline: AtomicBool,
}

impl MemoryStore {
    /// Store over a dataset with the trail disabled.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self::with_trail(dataset, TrailWriter::disabled())
    }

    #[must_use]
    pub fn with_trail(dataset: Dataset, trail: TrailWriter) -> Self {
        Self {
            data: RwLock::new(dataset),
            trail,
            ticket_statistics_offline: AtomicBool::new(false),
            work_orders_offline: AtomicBool::new(false),
        }
    }

    /// Load the configured dataset, replay its trail, and open the trail writer.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the dataset cannot be loaded, the trail cannot
    /// be replayed, or the trail directory cannot be created.
    pub fn open(config: &StoreConfig) -> Result<(Self, ReplayReport), StoreError> {
        let mut dataset = Dataset::load(&config.dataset_path())?;
        let report = TrailReplayer::replay(&mut dataset, &config.trail_dir())?;
        let trail = if config.trail_enabled {
            TrailWriter::new(config.trail_dir())?
        } else {
            TrailWriter::disabled()
        };
        info!(
            dataset = %config.dataset_path,
            insights = dataset.insights.len(),
            replayed = report.entries_replayed,
            "insight store opened"
        );
        Ok((Self::with_trail(dataset, trail), report))
    }

    /// Make the ticket-statistics collaborator fail, as when it is offline.
    pub fn set_ticket_statistics_offline(&self, offline: bool) {
        self.ticket_statistics_offline
            .store(offline, Ordering::Relaxed);
    }

    /// Make the work-order lookup fail, as when it is offline.
    pub fn set_work_orders_offline(&self, offline: bool) {
        self.work_orders_offline.store(offline, Ordering::Relaxed);
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> Dataset {
        self.data.read().await.clone()
    }

    #[must_use]
    pub const fn trail(&self) -> &TrailWriter {
        &self.trail
    }
}

impl InsightStore for MemoryStore {
    async fn get_insight(&self, insight_id: &str) -> Result<Option<Insight>, CoreError> {
        Ok(self.data.read().await.insight(insight_id).cloned())
    }

    async fn latest_occurrence(&self, insight_id: &str) -> Result<Option<Occurrence>, CoreError> {
        Ok(self
            .data
            .read()
            .await
            .occurrences_of(insight_id)
            .max_by_key(|occurrence| occurrence.started)
            .cloned())
    }

    async fn occurrences(&self, insight_id: &str) -> Result<Vec<Occurrence>, CoreError> {
        Ok(self
            .data
            .read()
            .await
            .occurrences_of(insight_id)
            .cloned()
            .collect())
    }

    async fn status_history(&self, insight_id: &str) -> Result<Vec<StatusLogEntry>, CoreError> {
        Ok(self
            .data
            .read()
            .await
            .status_logs_of(insight_id)
            .cloned()
            .collect())
    }

    async fn dependencies(&self, insight_id: &str) -> Result<Vec<Dependency>, CoreError> {
        Ok(self
            .data
            .read()
            .await
            .dependencies
            .iter()
            .filter(|dependency| dependency.from_insight_id == insight_id)
            .cloned()
            .collect())
    }

    async fn apply_status(
        &self,
        insight_id: &str,
        expected: InsightStatus,
        status: InsightStatus,
        entry: Option<StatusLogEntry>,
    ) -> Result<(), CoreError> {
        let mut data = self.data.write().await;
        let Some(current) = data.insight(insight_id).map(|insight| insight.status) else {
            return Err(CoreError::insight_not_found(insight_id));
        };
        if current != expected {
            warn!(insight_id, %expected, %current, "status moved before write");
            return Err(CoreError::Conflict {
                entity_type: "insight".to_string(),
                id: insight_id.to_string(),
                expected: expected.to_string(),
                actual: current.to_string(),
            });
        }

        // Trail first: a failed append leaves the dataset untouched.
        if let Some(entry) = &entry {
            self.trail.append(entry)?;
        }

        let now = entry
            .as_ref()
            .map_or_else(chrono::Utc::now, |entry| entry.created_at);
        if let Some(insight) = data.insight_mut(insight_id) {
            insight.status = status;
            insight.updated_at = now;
        }
        if let Some(entry) = entry {
            data.status_logs.push(entry);
        }
        debug!(insight_id, status = %status, "status written");
        Ok(())
    }
}

impl WorkOrderLookup for MemoryStore {
    async fn has_open_work(&self, insight_id: &str) -> Result<bool, CoreError> {
        if self.work_orders_offline.load(Ordering::Relaxed) {
            return Err(CoreError::Collaborator {
                collaborator: "work_orders".to_string(),
                message: "service unavailable".to_string(),
            });
        }
        Ok(self
            .data
            .read()
            .await
            .open_work
            .iter()
            .any(|id| id == insight_id))
    }
}

impl TicketStatistics for MemoryStore {
    async fn ticket_statistics(
        &self,
        insight_ids: &[String],
    ) -> Result<Vec<TicketStatistic>, CoreError> {
        if self.ticket_statistics_offline.load(Ordering::Relaxed) {
            return Err(CoreError::Collaborator {
                collaborator: "ticket_statistics".to_string(),
                message: "service unavailable".to_string(),
            });
        }
        Ok(self
            .data
            .read()
            .await
            .ticket_statistics
            .iter()
            .filter(|stat| insight_ids.contains(&stat.insight_id))
            .cloned()
            .collect())
    }
}
