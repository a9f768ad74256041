//! Strict error handling with AppError enum
//!
//! Every fallible operation in the crate returns `AppResult<T>`.
//! All variants are serializable so the frontend can render them directly.

use thiserror::Error;
use serde::Serialize;

/// Application errors
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Category or unit lookup failed in the conversion table
    #[error("Unknown unit: '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },

    /// Caller input rejected before conversion
    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("CSV Error: {0}")]
    Csv(String),

    /// Settings (de)serialization failure
    #[error("Serialization Error: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn unknown_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        AppError::UnknownUnit {
            category: category.into(),
            unit: unit.into(),
        }
    }
}

// Implement conversion from standard errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(format!("JSON error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
