//! Converter widget state
//!
//! Everything the widget keeps between keystrokes: the typed value, the two
//! selected units and the last displayed result. Rendering is left to the
//! caller; this type only owns the state transitions.

use crate::core::catalog::UnitCatalog;
use crate::core::features::unit_converter::ConversionEngine;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::WidgetSettings;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ConverterWidget {
    catalog: UnitCatalog,
    engine: ConversionEngine,
    input: String,
    from_unit: String,
    to_unit: String,
    result: Option<String>,
}

impl ConverterWidget {
    pub fn new(catalog: UnitCatalog, settings: &WidgetSettings) -> AppResult<Self> {
        settings.validate(&catalog)?;
        Ok(Self {
            catalog,
            engine: ConversionEngine::new(),
            input: String::new(),
            from_unit: settings.default_from_unit.clone(),
            to_unit: settings.default_to_unit.clone(),
            result: None,
        })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Keypad digit 0-9
    pub fn press_digit(&mut self, digit: u8) -> AppResult<()> {
        let ch = char::from_digit(u32::from(digit), 10)
            .ok_or_else(|| AppError::Validation(format!("Not a keypad digit: {}", digit)))?;
        self.input.push(ch);
        Ok(())
    }

    /// Appended as-is, even if the input already has a point
    pub fn press_decimal_point(&mut self) {
        self.input.push('.');
    }

    /// Free-text entry replaces the whole input
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Backspace
    pub fn delete(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.result = None;
    }

    pub fn select_from_unit(&mut self, symbol: &str) -> AppResult<()> {
        self.from_unit = self.selectable(symbol)?;
        Ok(())
    }

    pub fn select_to_unit(&mut self, symbol: &str) -> AppResult<()> {
        self.to_unit = self.selectable(symbol)?;
        Ok(())
    }

    fn selectable(&self, symbol: &str) -> AppResult<String> {
        self.catalog
            .find(symbol)
            .map(|unit| unit.symbol.to_string())
            .ok_or_else(|| AppError::Validation(format!("Unit not in catalog: {}", symbol)))
    }

    /// Run the converter on the current state and keep the displayed text
    pub fn convert(&mut self) -> &str {
        let outcome = self.engine.convert(&self.input, &self.from_unit, &self.to_unit);
        debug!(input = %self.input, success = outcome.is_success(), "Widget conversion");
        self.result.insert(outcome.to_string())
    }

    pub fn result_line(&self) -> Option<String> {
        self.result.as_ref().map(|result| format!("Result: {}", result))
    }
}
