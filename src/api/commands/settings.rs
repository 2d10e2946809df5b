//! Settings command module
//!
//! Handles widget settings persistence.

use crate::core::catalog::UnitCatalog;
use crate::shared::error::AppResult;
use crate::shared::settings::WidgetSettings;
use std::path::Path;

/// Get current widget settings, from `path` when given
pub fn get_settings(path: Option<&Path>) -> AppResult<WidgetSettings> {
    match path {
        Some(path) => WidgetSettings::load_from(path),
        None => WidgetSettings::load(),
    }
}

/// Validate and save widget settings
pub fn save_settings(settings: &WidgetSettings, path: Option<&Path>) -> AppResult<()> {
    settings.validate(&UnitCatalog::default())?;
    match path {
        Some(path) => settings.save_to(path),
        None => settings.save(),
    }
}
