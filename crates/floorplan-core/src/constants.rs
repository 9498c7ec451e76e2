//! Numeric limits and tuning constants for plan geometry.

/// Schema tag written into every exported plan document.
pub const PLAN_SCHEMA_VERSION: &str = "floorplan/1";

/// Smallest width or height a canvas may be resized to.
pub const MIN_CANVAS_SIZE: f64 = 1.0;

/// Smallest width or height a rectangular area may shrink to.
pub const MIN_AREA_SIZE: f64 = 0.1;

/// Lower bound for the viewport zoom factor.
pub const MIN_ZOOM: f64 = 0.1;

/// Number of undo records kept before the oldest is evicted.
pub const HISTORY_LIMIT: usize = 100;

/// Segments used when an ellipse is sampled into a ring.
pub const ELLIPSE_SEGMENTS: usize = 48;

/// Fraction of the grid step within which a neighbouring edge wins over the grid.
pub const NEIGHBOR_SNAP_FACTOR: f64 = 0.6;

/// Angle snapping increment, in degrees.
pub const ANGLE_SNAP_STEP: f64 = 15.0;

/// Largest angle in the snapping set, in degrees.
pub const ANGLE_SNAP_MAX: f64 = 315.0;

/// Rings whose absolute area is below this are treated as degenerate.
pub const AREA_EPSILON: f64 = 1e-9;
