//! JSON dataset the in-memory store is seeded from.

use std::path::Path;

use serde::{Deserialize, Serialize};

use ins_core::entities::{Dependency, Insight, Occurrence, StatusLogEntry};
use ins_core::responses::TicketStatistic;

use crate::error::StoreError;

/// Everything the store knows, as one serializable document.
///
/// Every section is optional in the JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dataset {
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub occurrences: Vec<Occurrence>,
    #[serde(default)]
    pub status_logs: Vec<StatusLogEntry>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    /// Insight ids that still have open work orders.
    #[serde(default)]
    pub open_work: Vec<String>,
    #[serde(default)]
    pub ticket_statistics: Vec<TicketStatistic>,
}

impl Dataset {
    /// Read a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read, or
    /// `StoreError::Json` if it does not parse.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Json` if the text does not parse.
    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(text)?)
    }

    #[must_use]
    pub fn insight(&self, insight_id: &str) -> Option<&Insight> {
        self.insights.iter().find(|insight| insight.id == insight_id)
    }

    pub fn insight_mut(&mut self, insight_id: &str) -> Option<&mut Insight> {
        self.insights
            .iter_mut()
            .find(|insight| insight.id == insight_id)
    }

    pub fn occurrences_of<'a>(
        &'a self,
        insight_id: &'a str,
    ) -> impl Iterator<Item = &'a Occurrence> + 'a {
        self.occurrences
            .iter()
            .filter(move |occurrence| occurrence.insight_id == insight_id)
    }

    pub fn status_logs_of<'a>(
        &'a self,
        insight_id: &'a str,
    ) -> impl Iterator<Item = &'a StatusLogEntry> + 'a {
        self.status_logs
            .iter()
            .filter(move |entry| entry.insight_id == insight_id)
    }

    #[must_use]
    pub fn has_status_log(&self, entry_id: &str) -> bool {
        self.status_logs.iter().any(|entry| entry.id == entry_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_default_to_empty() {
        let dataset = Dataset::from_json(r#"{ "open_work": ["ins-1"] }"#).unwrap();
        assert!(dataset.insights.is_empty());
        assert!(dataset.dependencies.is_empty());
        assert_eq!(dataset.open_work, vec!["ins-1".to_string()]);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let result = Dataset::from_json("{ insights: ");
        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = Dataset::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
