//! Dimensional unit algebra
//!
//! The general-purpose collaborator behind the converter: a registry of unit
//! definitions keyed by symbol, a `Quantity` built from a numeric literal plus
//! a unit, and conversion between units of the same dimension.
//!
//! Only proportional units are registered; conversions scale through the
//! dimension's base unit. Temperature scales are not known here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Physical dimension of a unit. Units convert only within one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Mass,
    Temperature,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit definition with conversion factors relative to the dimension's base unit
#[derive(Debug, Clone)]
pub struct UnitDefinition {
    pub symbol: &'static str,
    pub dimension: Dimension,
    pub factor: f64,
}

impl UnitDefinition {
    const fn new(symbol: &'static str, dimension: Dimension, factor: f64) -> Self {
        Self { symbol, dimension, factor }
    }

    fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }

    fn from_base(&self, base: f64) -> f64 {
        base / self.factor
    }
}

/// Errors raised by the unit algebra
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Invalid numeric literal: '{0}'")]
    InvalidLiteral(String),

    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),

    #[error("Cannot convert {from} ({from_dimension}) to {to} ({to_dimension})")]
    IncompatibleUnits {
        from: String,
        from_dimension: Dimension,
        to: String,
        to_dimension: Dimension,
    },

    #[error("Result of converting to {0} is not a finite number")]
    NonFinite(String),
}

// Length base: metre. Mass base: kilogram.
static UNIT_REGISTRY: Lazy<HashMap<&'static str, UnitDefinition>> = Lazy::new(|| {
    [
        UnitDefinition::new("m", Dimension::Length, 1.0),
        UnitDefinition::new("cm", Dimension::Length, 0.01),
        UnitDefinition::new("km", Dimension::Length, 1000.0),
        UnitDefinition::new("in", Dimension::Length, 0.0254),
        UnitDefinition::new("ft", Dimension::Length, 0.3048),
        UnitDefinition::new("g", Dimension::Mass, 0.001),
        UnitDefinition::new("kg", Dimension::Mass, 1.0),
        UnitDefinition::new("lb", Dimension::Mass, 0.45359237),
    ]
    .into_iter()
    .map(|def| (def.symbol, def))
    .collect()
});

// Whole-string decimal literal: sign, mantissa, optional exponent.
static RE_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$")
        .expect("Failed to compile numeric literal pattern")
});

/// Look up a unit definition by symbol
pub fn lookup(symbol: &str) -> Result<&'static UnitDefinition, UnitError> {
    UNIT_REGISTRY
        .get(symbol)
        .ok_or_else(|| UnitError::UnknownUnit(symbol.to_string()))
}

/// Parse a numeric literal. The whole trimmed text must be a decimal number.
pub fn parse_literal(text: &str) -> Result<f64, UnitError> {
    let trimmed = text.trim();
    if !RE_LITERAL.is_match(trimmed) {
        return Err(UnitError::InvalidLiteral(text.to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| UnitError::InvalidLiteral(text.to_string()))?;

    // "1e999" matches the grammar but overflows
    if !value.is_finite() {
        return Err(UnitError::InvalidLiteral(text.to_string()));
    }

    Ok(value)
}

/// A value tagged with a registered unit
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: &'static UnitDefinition,
}

impl Quantity {
    /// Build a quantity from a numeric literal and a unit symbol
    pub fn parse(literal: &str, symbol: &str) -> Result<Self, UnitError> {
        let unit = lookup(symbol)?;
        let value = parse_literal(literal)?;
        Ok(Self { value, unit })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn symbol(&self) -> &'static str {
        self.unit.symbol
    }

    /// Convert to another unit of the same dimension
    pub fn to(&self, symbol: &str) -> Result<Self, UnitError> {
        let target = lookup(symbol)?;

        if target.dimension != self.unit.dimension {
            return Err(UnitError::IncompatibleUnits {
                from: self.unit.symbol.to_string(),
                from_dimension: self.unit.dimension,
                to: target.symbol.to_string(),
                to_dimension: target.dimension,
            });
        }

        let value = if target.symbol == self.unit.symbol {
            self.value
        } else {
            target.from_base(self.unit.to_base(self.value))
        };

        if !value.is_finite() {
            return Err(UnitError::NonFinite(target.symbol.to_string()));
        }

        Ok(Self { value, unit: target })
    }
}

impl PartialEq for UnitDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_value(self.value), self.unit.symbol)
    }
}

const SIGNIFICANT_DIGITS: usize = 14;
const LOWER_EXP: i32 = -3;
const UPPER_EXP: i32 = 5;

/// Render a value the way the unit algebra prints quantities
///
/// Rounded to 14 significant digits with trailing zeros dropped. Fixed
/// notation for 1e-3 <= |v| < 1e5, exponential otherwise ("1e+5", "2.5e-4").
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    if exponent < LOWER_EXP || exponent >= UPPER_EXP {
        let (head, tail) = digits.split_at(1);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return if tail.is_empty() {
            format!("{}{}e{}{}", sign, head, exp_sign, exponent.abs())
        } else {
            format!("{}{}.{}e{}{}", sign, head, tail, exp_sign, exponent.abs())
        };
    }

    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("{}0.{}{}", sign, zeros, digits);
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        format!("{}{}{}", sign, digits, "0".repeat(int_len - digits.len()))
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}
