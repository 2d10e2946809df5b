//! Conversion engine
//!
//! Entry point of the converter. Classifies a request, runs the matching
//! strategy, and collapses every failure into one opaque outcome. Callers
//! never see an error, only `Success` or `Failure`.

use super::{Conversion, ConversionKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Fixed message shown for any failed conversion
pub const FAILURE_MESSAGE: &str = "Conversion not possible";

/// One conversion to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest<'a> {
    pub raw_input: &'a str,
    pub from_unit: &'a str,
    pub to_unit: &'a str,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(raw_input: &'a str, from_unit: &'a str, to_unit: &'a str) -> Self {
        Self { raw_input, from_unit, to_unit }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "lowercase")]
pub enum ConversionResult {
    Success(String),
    Failure,
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success(_))
    }

    /// Text to show the user: the result, or the failure message
    pub fn as_display(&self) -> &str {
        match self {
            ConversionResult::Success(text) => text,
            ConversionResult::Failure => FAILURE_MESSAGE,
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_display())
    }
}

/// Stateless converter. Holds nothing between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionEngine;

impl ConversionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn convert(&self, raw_input: &str, from_unit: &str, to_unit: &str) -> ConversionResult {
        self.run(&ConversionRequest::new(raw_input, from_unit, to_unit))
    }

    pub fn run(&self, request: &ConversionRequest<'_>) -> ConversionResult {
        let kind = ConversionKind::classify(request.from_unit, request.to_unit);
        debug!(
            kind = kind.name(),
            from = request.from_unit,
            to = request.to_unit,
            "Dispatching conversion"
        );

        match kind.apply(request.raw_input) {
            Ok(text) => ConversionResult::Success(text),
            Err(e) => {
                debug!(
                    error = %e,
                    input = request.raw_input,
                    from = request.from_unit,
                    to = request.to_unit,
                    "Conversion failed"
                );
                ConversionResult::Failure
            }
        }
    }
}

/// Convert with the default engine
pub fn convert(raw_input: &str, from_unit: &str, to_unit: &str) -> ConversionResult {
    ConversionEngine::new().convert(raw_input, from_unit, to_unit)
}

/// Convert and render: the formatted result or `FAILURE_MESSAGE`
pub fn convert_to_string(raw_input: &str, from_unit: &str, to_unit: &str) -> String {
    convert(raw_input, from_unit, to_unit).to_string()
}
