//! Converter command module
//!
//! Populates the category/unit selectors and runs conversions submitted by
//! the form. Input checks the form performs before converting live here.

use tracing::warn;

use crate::core::session::ConverterSession;
use crate::core::unit_converter::{
    format_result_display, format_source_display, UnitCategory, UnitDefinition, CONVERSION_TABLE,
};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{CategoryDTO, ConvertUnitsRequest, ConvertUnitsResponse, GetUnitsResponse, UnitDTO};

// Error constants
pub const ERR_SELECT_DIFFERENT_UNITS: &str = "Please select different units and enter a value";
pub const ERR_NEGATIVE_VALUE: &str = "Value cannot be negative. Please provide a positive value.";
pub const ERR_NON_FINITE_VALUE: &str = "Value must be a finite number";
/// Message the form shows when the converter rejects a unit
pub const ERR_INVALID_CONVERSION: &str = "Invalid unit conversion";

fn unit_dto(def: &UnitDefinition) -> UnitDTO {
    UnitDTO {
        id: def.name.to_string(),
        label: def.label.to_string(),
        category: def.category.as_str().to_string(),
        factor: def.base_factor,
    }
}

/// Get all categories in selector order
pub fn get_categories_command() -> Vec<CategoryDTO> {
    CONVERSION_TABLE
        .categories()
        .into_iter()
        .map(|category| CategoryDTO {
            id: category.as_str().to_string(),
            label: category.label().to_string(),
            base_unit: CONVERSION_TABLE.base_unit(category).unwrap_or_default().to_string(),
        })
        .collect()
}

/// Get the units of one category for the "From Unit" selector
pub fn get_units_command(category: &str) -> AppResult<GetUnitsResponse> {
    let category: UnitCategory = category.parse()?;
    let units = CONVERSION_TABLE.definitions(category).map(unit_dto).collect();
    Ok(GetUnitsResponse { units })
}

/// Get the units for the "To Unit" selector, which never offers the source unit
pub fn get_target_units_command(category: &str, from_unit: &str) -> AppResult<GetUnitsResponse> {
    let category: UnitCategory = category.parse()?;
    CONVERSION_TABLE.lookup(category, from_unit)?;

    let units = CONVERSION_TABLE
        .definitions(category)
        .filter(|def| def.name != from_unit)
        .map(unit_dto)
        .collect();
    Ok(GetUnitsResponse { units })
}

/// Validate the form input and return the value to convert
fn validate_request(request: &ConvertUnitsRequest) -> AppResult<f64> {
    let value = match request.value {
        Some(value) if value != 0.0 && request.from_unit != request.to_unit => value,
        _ => {
            warn!(
                "[convert_units_command] Rejected: value {:?}, {} → {}",
                request.value, request.from_unit, request.to_unit
            );
            return Err(AppError::Validation(ERR_SELECT_DIFFERENT_UNITS.to_string()));
        }
    };

    if !value.is_finite() {
        return Err(AppError::Validation(ERR_NON_FINITE_VALUE.to_string()));
    }
    if value < 0.0 {
        return Err(AppError::Validation(ERR_NEGATIVE_VALUE.to_string()));
    }
    Ok(value)
}

/// Convert a value and record it in the session history
pub fn convert_units_command(
    session: &mut ConverterSession,
    request: ConvertUnitsRequest,
) -> AppResult<ConvertUnitsResponse> {
    let value = validate_request(&request)?;

    // An unknown category is reported the same way as an unknown unit
    let category: UnitCategory = request
        .category
        .parse()
        .map_err(|_| AppError::unknown_unit(request.category.as_str(), request.from_unit.as_str()))?;

    let record = session.convert_and_record(category, value, &request.from_unit, &request.to_unit)?;

    Ok(ConvertUnitsResponse {
        result: record.result,
        source_display: format_source_display(record.value, &record.from_unit),
        result_display: format_result_display(record.result, &record.to_unit),
        from_unit: record.from_unit.clone(),
        to_unit: record.to_unit.clone(),
        record_id: record.id.clone(),
    })
}

/// Message the form shows for a failed conversion
pub fn error_message(err: &AppError) -> String {
    match err {
        AppError::UnknownUnit { .. } => ERR_INVALID_CONVERSION.to_string(),
        AppError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}
