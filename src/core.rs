//! Core conversion logic
//!
//! - `unit_converter`: static conversion table and the converter
//! - `history`: bounded session history and CSV export
//! - `session`: explicitly owned per-user state

pub mod unit_converter;
pub mod history;
pub mod session;

pub use history::{ConversionRecord, HistoryLog, MAX_HISTORY_SIZE};
pub use session::ConverterSession;
pub use unit_converter::{convert, convert_in, UnitCategory, CONVERSION_TABLE};
