//! Per-user converter session
//!
//! Owns the conversion history and the loaded settings. Callers create one
//! session per user and pass it explicitly into every command; dropping it
//! drops the history.

use tracing::warn;

use crate::core::history::{ConversionRecord, HistoryLog};
use crate::core::unit_converter::{self, UnitCategory};
use crate::shared::error::AppResult;
use crate::shared::settings::ConverterSettings;

#[derive(Debug, Clone, Default)]
pub struct ConverterSession {
    history: HistoryLog,
    settings: ConverterSettings,
}

impl ConverterSession {
    pub fn new(settings: ConverterSettings) -> Self {
        Self {
            history: HistoryLog::new(),
            settings,
        }
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryLog {
        &mut self.history
    }

    pub fn settings(&self) -> &ConverterSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ConverterSettings) {
        self.settings = settings;
    }

    /// Convert and, on success, prepend the outcome to the history.
    ///
    /// A failed conversion leaves the history untouched.
    pub fn convert_and_record(
        &mut self,
        category: UnitCategory,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> AppResult<&ConversionRecord> {
        let result = unit_converter::convert_in(category, value, from_unit, to_unit).map_err(|e| {
            warn!("[ConverterSession] Conversion not recorded: {}", e);
            e
        })?;

        self.history
            .record(ConversionRecord::new(category, value, from_unit, to_unit, result));

        // record() always leaves the new entry at index 0
        Ok(&self.history.entries()[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_conversion_is_recorded() {
        let mut session = ConverterSession::default();

        let record = session
            .convert_and_record(UnitCategory::Time, 90.0, "minutes", "hours")
            .unwrap();
        assert_eq!(record.result, 1.5);
        assert_eq!(record.from_unit, "minutes");

        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_failed_conversion_is_not_recorded() {
        let mut session = ConverterSession::default();

        assert!(session
            .convert_and_record(UnitCategory::Time, 1.0, "fortnights", "hours")
            .is_err());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_sessions_do_not_share_history() {
        let mut first = ConverterSession::default();
        let second = ConverterSession::default();

        first
            .convert_and_record(UnitCategory::Volume, 2.0, "liters", "milliliters")
            .unwrap();

        assert_eq!(first.history().len(), 1);
        assert!(second.history().is_empty());
    }
}
