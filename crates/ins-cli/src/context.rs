use anyhow::Context;
use ins_config::InsightConfig;
use ins_engine::{InsightService, ServiceOptions};
use ins_store::MemoryStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: InsightService<MemoryStore>,
}

impl AppContext {
    /// Open the configured dataset, replay its trail, and build the service.
    pub fn init(config: &InsightConfig) -> anyhow::Result<Self> {
        let (store, report) = MemoryStore::open(&config.store).with_context(|| {
            format!(
                "failed to open insight dataset '{}'",
                config.store.dataset_path
            )
        })?;
        tracing::debug!(
            trail_files = report.trail_files,
            replayed = report.entries_replayed,
            "status-log trail replayed"
        );

        let service = InsightService::new(store, ServiceOptions::from(&config.engine));
        Ok(Self { service })
    }
}
