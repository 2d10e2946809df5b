// Temperature conversion
// Scales have different zero points, so each ordered pair gets its own
// affine formula instead of a shared scale factor.

use super::{Conversion, ConversionError};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "°C" => Some(Self::Celsius),
            "°F" => Some(Self::Fahrenheit),
            "K" => Some(Self::Kelvin),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }
}

/// True for °C, °F and K
pub fn is_temperature_unit(symbol: &str) -> bool {
    TemperatureScale::from_symbol(symbol).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureConversion {
    from: TemperatureScale,
    to: TemperatureScale,
}

impl TemperatureConversion {
    pub fn new(from: TemperatureScale, to: TemperatureScale) -> Self {
        Self { from, to }
    }

    /// None unless both symbols name a temperature scale
    pub fn from_symbols(from_unit: &str, to_unit: &str) -> Option<Self> {
        Some(Self::new(
            TemperatureScale::from_symbol(from_unit)?,
            TemperatureScale::from_symbol(to_unit)?,
        ))
    }

    /// Apply the formula for this scale pair
    pub fn convert_value(&self, value: f64) -> f64 {
        use TemperatureScale::*;

        // (v * 9) / 5, not v * 1.8
        match (self.from, self.to) {
            (Celsius, Fahrenheit) => (value * 9.0) / 5.0 + 32.0,
            (Celsius, Kelvin) => value + 273.15,
            (Fahrenheit, Celsius) => ((value - 32.0) * 5.0) / 9.0,
            (Fahrenheit, Kelvin) => ((value - 32.0) * 5.0) / 9.0 + 273.15,
            (Kelvin, Celsius) => value - 273.15,
            (Kelvin, Fahrenheit) => ((value - 273.15) * 9.0) / 5.0 + 32.0,
            _ => value,
        }
    }
}

impl Conversion for TemperatureConversion {
    fn apply(&self, raw_input: &str) -> Result<String, ConversionError> {
        let value = parse_leading_float(raw_input)
            .ok_or_else(|| ConversionError::InvalidNumber(raw_input.to_string()))?;

        Ok(format!("{} {}", to_fixed_2(self.convert_value(value)), self.to.symbol()))
    }
}

/// Two-decimal rendering with `Number.prototype.toFixed(2)` rules
///
/// Exact ties round away from zero ("0.125" -> "0.13"), where `{:.2}` would
/// round to even. Magnitudes from 1e21 up switch to exponent form, and
/// infinities print as "Infinity". "-0" prints without a sign.
pub fn to_fixed_2(value: f64) -> String {
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude >= 1e21 {
        // Shortest round-trip digits, exponent always signed: "1e+21"
        let shortest = format!("{:e}", magnitude);
        return match shortest.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}{}e+{}", sign, mantissa, exp),
            _ => format!("{}{}", sign, shortest),
        };
    }

    // A third decimal of exactly 5 is only representable for odd multiples of 1/8
    let is_tie = magnitude < 1e15
        && (magnitude * 8.0).fract() == 0.0
        && (magnitude * 4.0).fract() != 0.0;

    if is_tie {
        // magnitude = eighths / 8 exactly, so cents = ceil(eighths * 12.5)
        let eighths = (magnitude * 8.0) as u64;
        let cents = (eighths * 25 + 1) / 2;
        format!("{}{}.{:02}", sign, cents / 100, cents % 100)
    } else {
        format!("{}{:.2}", sign, magnitude)
    }
}

// Longest decimal prefix after leading whitespace, exponent optional.
// "Infinity" is a number too.
static RE_LEADING_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("Failed to compile leading float pattern")
});

/// Lenient number parsing: "12.5abc" reads as 12.5, "abc" reads as nothing.
/// Overflowing literals ("1e999") read as infinity.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let prefix = RE_LEADING_FLOAT.find(text.trim_start())?;
    prefix.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::TemperatureScale::*;

    fn convert(raw: &str, from: TemperatureScale, to: TemperatureScale) -> Result<String, ConversionError> {
        TemperatureConversion::new(from, to).apply(raw)
    }

    #[test]
    fn test_celsius_conversions() {
        assert_eq!(convert("0", Celsius, Fahrenheit).unwrap(), "32.00 °F");
        assert_eq!(convert("37", Celsius, Fahrenheit).unwrap(), "98.60 °F");
        assert_eq!(convert("100", Celsius, Kelvin).unwrap(), "373.15 K");
    }

    #[test]
    fn test_fahrenheit_conversions() {
        assert_eq!(convert("32", Fahrenheit, Celsius).unwrap(), "0.00 °C");
        assert_eq!(convert("212", Fahrenheit, Kelvin).unwrap(), "373.15 K");
        assert_eq!(convert("-40", Fahrenheit, Celsius).unwrap(), "-40.00 °C");
    }

    #[test]
    fn test_kelvin_conversions() {
        assert_eq!(convert("0", Kelvin, Celsius).unwrap(), "-273.15 °C");
        assert_eq!(convert("273.15", Kelvin, Fahrenheit).unwrap(), "32.00 °F");
    }

    #[test]
    fn test_identity() {
        assert_eq!(convert("25", Celsius, Celsius).unwrap(), "25.00 °C");
        assert_eq!(convert("-3.456", Kelvin, Kelvin).unwrap(), "-3.46 K");
        assert_eq!(convert("-0", Fahrenheit, Fahrenheit).unwrap(), "0.00 °F");
    }

    #[test]
    fn test_invalid_input() {
        for raw in ["", "   ", "abc", ".", "-", "e5", "infinity", "NaN"] {
            assert!(
                matches!(convert(raw, Celsius, Fahrenheit), Err(ConversionError::InvalidNumber(_))),
                "{:?} should fail",
                raw
            );
        }
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        let cases = [
            ("0.125", "0.13 °C"),
            ("0.375", "0.38 °C"),
            ("36.125", "36.13 °C"),
            ("-0.125", "-0.13 °C"),
            ("-0.375", "-0.38 °C"),
            ("-36.125", "-36.13 °C"),
            ("0.25", "0.25 °C"),
            ("1.005", "1.00 °C"),
        ];
        for (raw, expected) in cases {
            assert_eq!(convert(raw, Celsius, Celsius).unwrap(), expected, "{}", raw);
        }
    }

    #[test]
    fn test_to_fixed_2_edges() {
        assert_eq!(to_fixed_2(-0.0), "0.00");
        assert_eq!(to_fixed_2(-0.001), "-0.00");
        assert_eq!(to_fixed_2(2.675), "2.67");
        assert_eq!(to_fixed_2(1e21), "1e+21");
        assert_eq!(to_fixed_2(-1.5e22), "-1.5e+22");
        assert_eq!(to_fixed_2(999999999999999.9), "999999999999999.88");
    }

    #[test]
    fn test_infinity_passes_through() {
        assert_eq!(convert("Infinity", Celsius, Fahrenheit).unwrap(), "Infinity °F");
        assert_eq!(convert("1e999", Kelvin, Kelvin).unwrap(), "Infinity K");
        assert_eq!(convert("-Infinity", Fahrenheit, Celsius).unwrap(), "-Infinity °C");
    }

    #[test]
    fn test_from_symbols() {
        assert_eq!(
            TemperatureConversion::from_symbols("°F", "K"),
            Some(TemperatureConversion::new(Fahrenheit, Kelvin))
        );
        assert_eq!(TemperatureConversion::from_symbols("°F", "m"), None);
    }

    #[test]
    fn test_leading_number_is_used() {
        assert_eq!(parse_leading_float("  12.5abc"), Some(12.5));
        assert_eq!(parse_leading_float("1.2.3"), Some(1.2));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("-2e2 degrees"), Some(-200.0));
        assert_eq!(parse_leading_float("x1"), None);
    }

    #[test]
    fn test_is_temperature_unit() {
        assert!(is_temperature_unit("°C"));
        assert!(is_temperature_unit("°F"));
        assert!(is_temperature_unit("K"));
        assert!(!is_temperature_unit("C"));
        assert!(!is_temperature_unit("k"));
        assert!(!is_temperature_unit("m"));
    }
}
