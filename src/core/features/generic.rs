//! Unit-algebra conversion for proportional units (length, mass)

use super::{Conversion, ConversionError};
use crate::core::units::Quantity;

#[derive(Debug, Clone, PartialEq)]
pub struct GenericConversion {
    from: String,
    to: String,
}

impl GenericConversion {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Conversion for GenericConversion {
    fn apply(&self, raw_input: &str) -> Result<String, ConversionError> {
        let converted = Quantity::parse(raw_input, &self.from)?.to(&self.to)?;
        Ok(converted.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::UnitError;

    #[test]
    fn test_length_and_mass() {
        assert_eq!(GenericConversion::new("m", "cm").apply("1").unwrap(), "100 cm");
        assert_eq!(GenericConversion::new("kg", "g").apply("2.5").unwrap(), "2500 g");
        assert_eq!(GenericConversion::new("cm", "in").apply("2.54").unwrap(), "1 in");
    }

    #[test]
    fn test_errors_keep_their_kind() {
        assert!(matches!(
            GenericConversion::new("m", "g").apply("1"),
            Err(ConversionError::Unit(UnitError::IncompatibleUnits { .. }))
        ));
        assert!(matches!(
            GenericConversion::new("m", "cm").apply(""),
            Err(ConversionError::Unit(UnitError::InvalidLiteral(_)))
        ));
        assert!(matches!(
            GenericConversion::new("m", "mi").apply("1"),
            Err(ConversionError::Unit(UnitError::UnknownUnit(_)))
        ));
    }
}
