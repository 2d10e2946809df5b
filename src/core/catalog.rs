//! Unit catalog offered by the widget
//!
//! The fixed set of units the selection controls are populated from, in
//! display order. The converter itself never consults it.

use super::units::Dimension;

/// A selectable unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub name: &'static str,
    pub symbol: &'static str,
    pub dimension: Dimension,
}

impl Unit {
    const fn new(name: &'static str, symbol: &'static str, dimension: Dimension) -> Self {
        Self { name, symbol, dimension }
    }
}

static UNITS: [Unit; 11] = [
    Unit::new("Meters", "m", Dimension::Length),
    Unit::new("Centimeters", "cm", Dimension::Length),
    Unit::new("Kilometers", "km", Dimension::Length),
    Unit::new("Inches", "in", Dimension::Length),
    Unit::new("Feet", "ft", Dimension::Length),
    Unit::new("Grams", "g", Dimension::Mass),
    Unit::new("Kilograms", "kg", Dimension::Mass),
    Unit::new("Pounds", "lb", Dimension::Mass),
    Unit::new("Fahrenheit", "°F", Dimension::Temperature),
    Unit::new("Celsius", "°C", Dimension::Temperature),
    Unit::new("Kelvin", "K", Dimension::Temperature),
];

/// Immutable view over the unit list, handed to whoever renders selectors
#[derive(Debug, Clone, Copy)]
pub struct UnitCatalog {
    units: &'static [Unit],
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self { units: &UNITS }
    }
}

impl UnitCatalog {
    pub fn units(&self) -> &'static [Unit] {
        self.units
    }

    pub fn find(&self, symbol: &str) -> Option<&'static Unit> {
        self.units.iter().find(|unit| unit.symbol == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.find(symbol).is_some()
    }
}
