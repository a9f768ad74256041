use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ConvertUnitsRequest {
    pub category: String,
    pub value: Option<f64>,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ConvertUnitsResponse {
    pub result: f64,
    /// e.g. "5.00 pounds ="
    pub source_display: String,
    /// e.g. "2.267960 kilograms"
    pub result_display: String,
    pub from_unit: String,
    pub to_unit: String,
    pub record_id: String,
}

// Rich Unit Data Transfer Object for frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct UnitDTO {
    pub id: String,       // Unit name (e.g., "meters", "pounds")
    pub label: String,    // Display name (e.g., "Meters", "Pounds")
    pub category: String, // Category (e.g., "length")
    pub factor: f64,      // Amount of base unit per one of this unit
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDTO>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct CategoryDTO {
    pub id: String,
    pub label: String,
    pub base_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct HistoryEntryDTO {
    pub id: String,
    pub timestamp: String,
    pub category: String,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
    pub display: String,
}

/// Payload for the CSV download hand-off
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ExportHistoryResponse {
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
}
