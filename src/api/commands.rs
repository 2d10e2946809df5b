//! Command modules
//!
//! Request/response entry points the front ends call into. Each submodule
//! maps DTOs from `shared::types` onto the core.
//!
//! - `units`: conversion and unit listing
//! - `settings`: settings persistence

pub mod settings;
pub mod units;
