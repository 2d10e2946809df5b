//! Unit command module
//!
//! Conversion and catalog listing for the widget front end.

use crate::core::catalog::UnitCatalog;
use crate::core::features::unit_converter::ConversionEngine;
use crate::shared::error::AppResult;
use crate::shared::types::{ConvertUnitsRequest, ConvertUnitsResponse, GetUnitsResponse, UnitDTO};

/// Convert a value between two units
///
/// A failed conversion is still a successful command: `success` is false and
/// `result` carries the failure message.
pub fn convert_units_command(request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
    let outcome = ConversionEngine::new().convert(&request.input, &request.from_unit, &request.to_unit);

    Ok(ConvertUnitsResponse {
        success: outcome.is_success(),
        result: outcome.to_string(),
        from_unit: request.from_unit,
        to_unit: request.to_unit,
    })
}

/// List the catalog in display order
pub fn get_all_units_command() -> AppResult<GetUnitsResponse> {
    let units = UnitCatalog::default().units().iter().map(UnitDTO::from).collect();
    Ok(GetUnitsResponse { units })
}
