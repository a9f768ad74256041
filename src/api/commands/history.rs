//! History command module
//!
//! Display, clear and export the session's conversion history.

use tracing::info;

use crate::core::history::export::{CSV_MIME_TYPE, TIMESTAMP_FORMAT};
use crate::core::history::ConversionRecord;
use crate::core::session::ConverterSession;
use crate::core::unit_converter::format_history_line;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ExportHistoryResponse, HistoryEntryDTO};

const ERR_EMPTY_HISTORY: &str = "No conversion history to export";

fn history_entry_dto(record: &ConversionRecord) -> HistoryEntryDTO {
    HistoryEntryDTO {
        id: record.id.clone(),
        timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        category: record.category.as_str().to_string(),
        value: record.value,
        from_unit: record.from_unit.clone(),
        to_unit: record.to_unit.clone(),
        result: record.result,
        display: format_history_line(record.value, &record.from_unit, record.result, &record.to_unit),
    }
}

/// Get history entries, newest first
pub fn get_history_command(session: &ConverterSession) -> Vec<HistoryEntryDTO> {
    session.history().entries().iter().map(history_entry_dto).collect()
}

pub fn clear_history_command(session: &mut ConverterSession) {
    session.history_mut().clear();
}

/// Build the CSV download payload
pub fn export_history_command(session: &ConverterSession) -> AppResult<ExportHistoryResponse> {
    let content = session.history().export_csv()?;
    Ok(ExportHistoryResponse {
        file_name: session.settings().export.file_name.clone(),
        mime_type: CSV_MIME_TYPE.to_string(),
        content,
    })
}

/// Write the CSV to the configured export location and return its path
pub fn save_history_csv_command(session: &ConverterSession) -> AppResult<String> {
    if session.history().is_empty() {
        return Err(AppError::Validation(ERR_EMPTY_HISTORY.to_string()));
    }

    let path = session.settings().export_path();
    session.history().write_csv(&path)?;

    info!("[save_history_csv_command] ✅ Saved history to {}", path.display());
    Ok(path.display().to_string())
}
