//! CSV export of the conversion history
//!
//! Format: header `timestamp,value,from,to,result`, one row per entry in log
//! order (newest first), UTF-8, `\n` line endings.

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::ConversionRecord;
use crate::shared::error::{AppError, AppResult};

pub const CSV_HEADER: [&str; 5] = ["timestamp", "value", "from", "to", "result"];
pub const DEFAULT_EXPORT_FILE_NAME: &str = "conversion_history.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize)]
struct CsvRow<'a> {
    timestamp: String,
    value: f64,
    from: &'a str,
    to: &'a str,
    result: f64,
}

impl<'a> From<&'a ConversionRecord> for CsvRow<'a> {
    fn from(record: &'a ConversionRecord) -> Self {
        Self {
            timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            value: record.value,
            from: &record.from_unit,
            to: &record.to_unit,
            result: record.result,
        }
    }
}

/// Write header plus one row per record.
///
/// The header is written explicitly so an empty log still yields it.
pub fn write_records<W: Write>(writer: W, records: &[ConversionRecord]) -> AppResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(CsvRow::from(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn to_csv_bytes(records: &[ConversionRecord]) -> AppResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records)?;
    Ok(buffer)
}

pub fn to_csv_string(records: &[ConversionRecord]) -> AppResult<String> {
    let bytes = to_csv_bytes(records)?;
    String::from_utf8(bytes).map_err(|e| AppError::Csv(format!("Invalid UTF-8 in export: {}", e)))
}

pub fn write_csv_file(path: &Path, records: &[ConversionRecord]) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Io(format!("Failed to create export directory: {}", e)))?;
        }
    }

    let file = File::create(path)
        .map_err(|e| AppError::Io(format!("Failed to create {}: {}", path.display(), e)))?;
    write_records(file, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unit_converter::UnitCategory;
    use chrono::{Local, TimeZone};

    fn record_at(hour: u32, value: f64, from: &str, to: &str, result: f64) -> ConversionRecord {
        let timestamp = Local.with_ymd_and_hms(2026, 10, 18, hour, 30, 0).unwrap();
        ConversionRecord::new(UnitCategory::Length, value, from, to, result).with_timestamp(timestamp)
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(to_csv_string(&[]).unwrap(), "timestamp,value,from,to,result\n");
    }

    #[test]
    fn test_rows_follow_log_order() {
        let records = vec![
            record_at(10, 2.5, "kilometers", "meters", 2500.0),
            record_at(9, 1.0, "miles", "meters", 1609.34),
        ];

        let csv = to_csv_string(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                "timestamp,value,from,to,result",
                "2026-10-18 10:30:00,2.5,kilometers,meters,2500.0",
                "2026-10-18 09:30:00,1.0,miles,meters,1609.34",
            ]
        );
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(DEFAULT_EXPORT_FILE_NAME);
        let records = vec![record_at(8, 3.0, "feet", "inches", 36.0)];

        write_csv_file(&path, &records).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_csv_string(&records).unwrap());
        assert!(written.ends_with("feet,inches,36.0\n"));
    }
}
