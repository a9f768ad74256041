//! Unit converter backend
//!
//! Converts values between units of length, weight, volume and time using a
//! static factor table, and keeps a per-session history of the last ten
//! conversions with CSV export. The frontend renders the form and calls the
//! functions in [`api::commands`], passing its own [`ConverterSession`].

pub mod api;
pub mod core;
pub mod shared;

pub use crate::core::history::{ConversionRecord, HistoryLog, MAX_HISTORY_SIZE};
pub use crate::core::session::ConverterSession;
pub use crate::core::unit_converter::{convert, convert_in, ConversionTable, UnitCategory, CONVERSION_TABLE};
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::settings::ConverterSettings;
