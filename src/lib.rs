//! # Floorplan
//!
//! Geometry and command core of a floor plan editor:
//! - Plans made of named areas (rectangles, ellipses, polygons, multipolygons)
//! - Snapping, clamping, splitting, rotation and mirroring
//! - Boolean merge and subtract through a polygon set-operations engine
//! - A pure command interpreter with bounded snapshot undo/redo
//!
//! ## Architecture
//!
//! The workspace is split into crates:
//!
//! 1. **floorplan-core** - Units, constants, error taxonomy
//! 2. **floorplan-settings** - Editor configuration on disk
//! 3. **floorplan-designer** - Plan model, geometry, commands, history
//! 4. **floorplan** - Logging setup, plan files and the command line tool

use std::path::Path;

use anyhow::Context;

pub use floorplan_core::{format_area, format_length, Error, LengthUnit, PlanDocumentError};
pub use floorplan_designer as designer;
pub use floorplan_designer::{
    export_plan, import_plan, plan_total_area, Command, CommandOutcome, DesignerState, History,
    Interpreter, Plan,
};
pub use floorplan_settings::{Config, EditorSettings, PlanDefaults};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize structured logging with tracing
///
/// Logs go to stderr so command output on stdout stays clean.
/// `RUST_LOG` refines the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Read and parse a plan document from disk.
pub fn load_plan_file(path: &Path) -> anyhow::Result<Plan> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file: {}", path.display()))?;
    let plan = import_plan(&text)
        .with_context(|| format!("Failed to parse plan file: {}", path.display()))?;
    tracing::info!("Loaded '{}' from {}", plan.meta.name, path.display());
    Ok(plan)
}

/// Write a plan document to disk, creating parent directories as needed.
pub fn save_plan_file(plan: &Plan, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let text = export_plan(plan).context("Failed to serialize plan")?;
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write plan file: {}", path.display()))?;
    tracing::info!("Saved '{}' to {}", plan.meta.name, path.display());
    Ok(())
}
