//! Configuration and settings management for the floor plan editor
//!
//! Provides configuration file handling, defaults and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into two sections:
//! - Editor behaviour (history depth, snapping, minimum sizes)
//! - Defaults applied to newly created plans and areas

use floorplan_core::constants::{HISTORY_LIMIT, MIN_AREA_SIZE, MIN_CANVAS_SIZE};
pub use floorplan_core::units::LengthUnit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

const CONFIG_DIR_NAME: &str = "floorplan";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Editor behaviour settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Number of undo steps kept
    pub history_limit: usize,
    /// Smallest width/height a rectangular area may shrink to
    pub min_area_size: f64,
    /// Grid step used when snapping is requested
    pub grid_step: f64,
    /// Snap moved/resized rectangles to neighbouring edges
    pub snap_to_neighbors: bool,
    /// Snap rotations to 15 degree increments
    pub angle_snap: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_limit: HISTORY_LIMIT,
            min_area_size: MIN_AREA_SIZE,
            grid_step: 0.5,
            snap_to_neighbors: true,
            angle_snap: true,
        }
    }
}

/// Defaults for new plans and areas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanDefaults {
    pub plan_name: String,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub units: LengthUnit,
    /// Fill color for new areas (CSS color string)
    pub fill: String,
    /// Stroke color for new areas (CSS color string)
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            plan_name: "Untitled plan".to_string(),
            canvas_width: 20.0,
            canvas_height: 15.0,
            units: LengthUnit::Meters,
            fill: "#dbeafe".to_string(),
            stroke: "#1e3a8a".to_string(),
            stroke_width: 0.05,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub editor: EditorSettings,
    pub defaults: PlanDefaults,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file (`<config dir>/floorplan/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config from the default location, falling back to defaults
    /// when no file exists yet.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(&path)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        if let Err(e) = config.validate() {
            tracing::warn!("Rejecting config {}: {}", path.display(), e);
            return Err(e);
        }
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let editor = &self.editor;
        if editor.history_limit == 0 {
            return Err(SettingsError::invalid(
                "editor.history_limit",
                "must be >= 1",
            ));
        }
        if !(editor.min_area_size.is_finite() && editor.min_area_size > 0.0) {
            return Err(SettingsError::invalid(
                "editor.min_area_size",
                "must be > 0",
            ));
        }
        if !(editor.grid_step.is_finite() && editor.grid_step > 0.0) {
            return Err(SettingsError::invalid("editor.grid_step", "must be > 0"));
        }

        let defaults = &self.defaults;
        if !(defaults.canvas_width.is_finite() && defaults.canvas_width >= MIN_CANVAS_SIZE) {
            return Err(SettingsError::invalid(
                "defaults.canvas_width",
                format!("must be >= {}", MIN_CANVAS_SIZE),
            ));
        }
        if !(defaults.canvas_height.is_finite() && defaults.canvas_height >= MIN_CANVAS_SIZE) {
            return Err(SettingsError::invalid(
                "defaults.canvas_height",
                format!("must be >= {}", MIN_CANVAS_SIZE),
            ));
        }
        if !(defaults.stroke_width.is_finite() && defaults.stroke_width >= 0.0) {
            return Err(SettingsError::invalid(
                "defaults.stroke_width",
                "must be >= 0",
            ));
        }
        if defaults.plan_name.trim().is_empty() {
            return Err(SettingsError::invalid(
                "defaults.plan_name",
                "must not be empty",
            ));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
