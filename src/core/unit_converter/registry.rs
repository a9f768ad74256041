//! Static conversion table
//!
//! Every unit is described by its multiplier to the base unit of its category.
//! The table is built once and never mutated.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::shared::error::{AppError, AppResult};

/// Unit categories for type-safe conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Weight,
    Volume,
    Time,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 4] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Volume,
        UnitCategory::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Volume => "volume",
            UnitCategory::Time => "time",
        }
    }

    /// Label shown in the category selector
    pub fn label(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Volume => "Volume",
            UnitCategory::Time => "Time",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitCategory {
    type Err = AppError;

    /// Accepts both selector labels ("Length") and canonical names ("length").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        UnitCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == lowered)
            .ok_or_else(|| AppError::Validation(format!("Unknown category: {}", s)))
    }
}

/// Unit definition with conversion factor
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub category: UnitCategory,
    pub base_factor: f64, // Amount of base unit in one of this unit
}

impl UnitDefinition {
    const fn new(name: &'static str, label: &'static str, category: UnitCategory, base_factor: f64) -> Self {
        Self { name, label, category, base_factor }
    }
}

/// Category → ordered unit definitions
#[derive(Debug, Clone)]
pub struct ConversionTable {
    units: Vec<UnitDefinition>,
}

/// Thread-safe conversion table initialized once at startup
pub static CONVERSION_TABLE: Lazy<ConversionTable> = Lazy::new(ConversionTable::builtin);

impl ConversionTable {
    /// Build a table from definitions. Order within a category is kept.
    pub fn from_definitions(units: Vec<UnitDefinition>) -> Self {
        Self { units }
    }

    fn builtin() -> Self {
        use UnitCategory::*;

        Self::from_definitions(vec![
            // Length (base: meters)
            UnitDefinition::new("meters", "Meters", Length, 1.0),
            UnitDefinition::new("kilometers", "Kilometers", Length, 1000.0),
            UnitDefinition::new("centimeters", "Centimeters", Length, 0.01),
            UnitDefinition::new("millimeters", "Millimeters", Length, 0.001),
            UnitDefinition::new("miles", "Miles", Length, 1609.34),
            UnitDefinition::new("yards", "Yards", Length, 0.9144),
            UnitDefinition::new("feet", "Feet", Length, 0.3048),
            UnitDefinition::new("inches", "Inches", Length, 0.0254),
            // Weight (base: kilograms)
            UnitDefinition::new("kilograms", "Kilograms", Weight, 1.0),
            UnitDefinition::new("grams", "Grams", Weight, 0.001),
            UnitDefinition::new("milligrams", "Milligrams", Weight, 0.000001),
            UnitDefinition::new("pounds", "Pounds", Weight, 0.453592),
            UnitDefinition::new("ounces", "Ounces", Weight, 0.0283495),
            // Volume (base: liters)
            UnitDefinition::new("liters", "Liters", Volume, 1.0),
            UnitDefinition::new("milliliters", "Milliliters", Volume, 0.001),
            UnitDefinition::new("gallons", "Gallons", Volume, 3.78541),
            UnitDefinition::new("quarts", "Quarts", Volume, 0.946353),
            UnitDefinition::new("pints", "Pints", Volume, 0.473176),
            // Time (base: seconds)
            UnitDefinition::new("seconds", "Seconds", Time, 1.0),
            UnitDefinition::new("minutes", "Minutes", Time, 60.0),
            UnitDefinition::new("hours", "Hours", Time, 3600.0),
            UnitDefinition::new("days", "Days", Time, 86400.0),
            UnitDefinition::new("weeks", "Weeks", Time, 604800.0),
        ])
    }

    pub fn categories(&self) -> Vec<UnitCategory> {
        UnitCategory::ALL
            .into_iter()
            .filter(|category| self.units.iter().any(|def| def.category == *category))
            .collect()
    }

    /// Unit definitions of one category, in selector order
    pub fn definitions(&self, category: UnitCategory) -> impl Iterator<Item = &UnitDefinition> {
        self.units.iter().filter(move |def| def.category == category)
    }

    pub fn units(&self, category: UnitCategory) -> Vec<&'static str> {
        self.definitions(category).map(|def| def.name).collect()
    }

    /// Units offered as conversion targets once `from_unit` is selected
    pub fn target_units(&self, category: UnitCategory, from_unit: &str) -> Vec<&'static str> {
        self.definitions(category)
            .filter(|def| def.name != from_unit)
            .map(|def| def.name)
            .collect()
    }

    pub fn lookup(&self, category: UnitCategory, unit: &str) -> AppResult<&UnitDefinition> {
        self.definitions(category)
            .find(|def| def.name == unit)
            .ok_or_else(|| AppError::unknown_unit(category.as_str(), unit))
    }

    pub fn factor(&self, category: UnitCategory, unit: &str) -> AppResult<f64> {
        self.lookup(category, unit).map(|def| def.base_factor)
    }

    pub fn base_unit(&self, category: UnitCategory) -> Option<&'static str> {
        self.definitions(category)
            .find(|def| def.base_factor == 1.0)
            .map(|def| def.name)
    }

    /// Check table invariants: positive finite factors, unique names per
    /// category, exactly one base unit per category.
    pub fn validate(&self) -> AppResult<()> {
        for category in self.categories() {
            let mut seen = HashSet::new();
            let mut base_units = 0;

            for def in self.definitions(category) {
                if !(def.base_factor.is_finite() && def.base_factor > 0.0) {
                    return Err(AppError::Validation(format!(
                        "Factor for '{}' in {} must be positive, got {}",
                        def.name, category, def.base_factor
                    )));
                }
                if !seen.insert(def.name) {
                    return Err(AppError::Validation(format!(
                        "Duplicate unit '{}' in {}",
                        def.name, category
                    )));
                }
                if def.base_factor == 1.0 {
                    base_units += 1;
                }
            }

            if base_units != 1 {
                return Err(AppError::Validation(format!(
                    "Category {} must have exactly one base unit, found {}",
                    category, base_units
                )));
            }
        }
        Ok(())
    }
}
