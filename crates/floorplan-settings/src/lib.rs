//! Floorplan Settings Crate
//!
//! Handles editor configuration: defaults for new plans, snapping and
//! history tuning, and reading/writing those settings as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, EditorSettings, LengthUnit, PlanDefaults};
pub use error::{SettingsError, SettingsResult};
