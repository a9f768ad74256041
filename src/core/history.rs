//! Conversion history
//!
//! Holds the most recent conversions of one session, newest first.
//!
//! - `HistoryLog`: bounded in-memory log with drop-oldest eviction
//! - `export`: CSV serialization of the log for download

pub mod export;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::unit_converter::UnitCategory;
use crate::shared::error::AppResult;

/// Maximum number of conversions kept per session
pub const MAX_HISTORY_SIZE: usize = 10;

/// One successful conversion. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub id: String,
    pub timestamp: DateTime<Local>,
    pub category: UnitCategory,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

impl ConversionRecord {
    /// Create a record stamped with the current local time
    pub fn new(category: UnitCategory, value: f64, from_unit: &str, to_unit: &str, result: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Local::now(),
            category,
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Session-scoped conversion log, newest first
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<ConversionRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry, evicting the oldest beyond `MAX_HISTORY_SIZE`
    pub fn record(&mut self, entry: ConversionRecord) {
        debug!("[HistoryLog] Recording {}", entry.id);
        self.entries.insert(0, entry);
        if self.entries.len() > MAX_HISTORY_SIZE {
            self.entries.truncate(MAX_HISTORY_SIZE);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        info!("[HistoryLog] Cleared all entries");
    }

    pub fn entries(&self) -> &[ConversionRecord] {
        &self.entries
    }

    /// Get a specific entry by index (0 = most recent)
    pub fn get(&self, index: usize) -> Option<&ConversionRecord> {
        self.entries.get(index)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&ConversionRecord> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// CSV text with header row, newest first
    pub fn export_csv(&self) -> AppResult<String> {
        export::to_csv_string(&self.entries)
    }

    /// UTF-8 encoded CSV for the download hand-off
    pub fn export_csv_bytes(&self) -> AppResult<Vec<u8>> {
        export::to_csv_bytes(&self.entries)
    }

    pub fn write_csv(&self, path: &Path) -> AppResult<()> {
        export::write_csv_file(path, &self.entries)?;
        info!("[HistoryLog] Exported {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }
}
