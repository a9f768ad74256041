// Unit Converter - Logic Layer
// Multiplicative conversions through the base unit of each category

pub mod registry;

pub use registry::{ConversionTable, UnitCategory, UnitDefinition, CONVERSION_TABLE};

use tracing::{debug, warn};

use crate::shared::error::{AppError, AppResult};

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// Fails with `UnknownUnit` when the category or either unit is not in the
/// conversion table. Category names are matched case-insensitively.
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: &str) -> AppResult<f64> {
    let parsed = category.parse::<UnitCategory>().map_err(|_| {
        warn!("[convert] Unknown category '{}'", category);
        AppError::unknown_unit(category, from_unit)
    })?;
    convert_in(parsed, value, from_unit, to_unit)
}

/// Typed variant of [`convert`].
pub fn convert_in(category: UnitCategory, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
    // Look up both units in the table before anything else
    let from_factor = CONVERSION_TABLE.factor(category, from_unit).map_err(|e| {
        warn!("[convert] {}", e);
        e
    })?;
    let to_factor = CONVERSION_TABLE.factor(category, to_unit).map_err(|e| {
        warn!("[convert] {}", e);
        e
    })?;

    // Same unit, no conversion needed
    if from_unit == to_unit {
        return Ok(value);
    }

    let base_value = value * from_factor;
    let result = base_value / to_factor;

    debug!(
        "[convert] {} {} → {} {} (base: {})",
        value, from_unit, result, to_unit, base_value
    );

    Ok(result)
}

// ============================================================================
// Display Formatting
// ============================================================================

/// Left side of the result card, e.g. "5.00 pounds ="
pub fn format_source_display(value: f64, unit: &str) -> String {
    format!("{:.2} {} =", value, unit)
}

/// Right side of the result card, e.g. "2.267960 kilograms"
pub fn format_result_display(result: f64, unit: &str) -> String {
    format!("{:.6} {}", result, unit)
}

/// One history line, e.g. "5.0 pounds → 2.2680 kilograms"
pub fn format_history_line(value: f64, from_unit: &str, result: f64, to_unit: &str) -> String {
    format!("{:?} {} → {:.4} {}", value, from_unit, result, to_unit)
}
