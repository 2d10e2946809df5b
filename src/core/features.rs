//! Conversion strategies with enum dispatch
//!
//! A request is classified once into a `ConversionKind` and then runs through
//! the `Conversion` trait. enum_dispatch gives static dispatch over the two
//! strategies, so each one can be exercised on its own.

use crate::core::units::UnitError;
use enum_dispatch::enum_dispatch;
use thiserror::Error;

pub mod generic;
pub mod temperature;
pub mod unit_converter;

pub use generic::GenericConversion;
pub use temperature::{is_temperature_unit, TemperatureConversion, TemperatureScale};

/// Why a conversion could not be produced
///
/// Only visible inside the crate's core: the converter collapses every
/// variant into `ConversionResult::Failure`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error(transparent)]
    Unit(#[from] UnitError),
}

#[enum_dispatch]
pub trait Conversion {
    /// Convert the raw input text and render the result
    fn apply(&self, raw_input: &str) -> Result<String, ConversionError>;
}

/// The two ways a request can be served
#[enum_dispatch(Conversion)]
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionKind {
    Temperature(TemperatureConversion),
    Generic(GenericConversion),
}

impl ConversionKind {
    /// Temperature when both ends are temperature scales, generic otherwise
    pub fn classify(from_unit: &str, to_unit: &str) -> Self {
        if is_temperature_unit(from_unit) && is_temperature_unit(to_unit) {
            if let Some(conversion) = TemperatureConversion::from_symbols(from_unit, to_unit) {
                return conversion.into();
            }
        }
        GenericConversion::new(from_unit, to_unit).into()
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConversionKind::Temperature(_) => "temperature",
            ConversionKind::Generic(_) => "generic",
        }
    }
}
