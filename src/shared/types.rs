use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "unit_widget.ts")]
pub struct ConvertUnitsRequest {
    pub input: String,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "unit_widget.ts")]
pub struct ConvertUnitsResponse {
    pub success: bool,
    pub result: String,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "unit_widget.ts")]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDTO>,
}

// Unit entry for selection controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "unit_widget.ts")]
pub struct UnitDTO {
    pub id: String,       // Unit symbol (e.g., "m", "°C")
    pub label: String,    // Display name (e.g., "Meters")
    pub category: String, // "length", "mass" or "temperature"
}

impl From<&crate::core::catalog::Unit> for UnitDTO {
    fn from(unit: &crate::core::catalog::Unit) -> Self {
        Self {
            id: unit.symbol.to_string(),
            label: unit.name.to_string(),
            category: unit.dimension.as_str().to_string(),
        }
    }
}
