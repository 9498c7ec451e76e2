//! # Floor Plan Designer
//!
//! The geometry-and-command core of the floor plan editor. A plan is an
//! immutable value; commands turn one plan into the next and the history
//! keeps before/after snapshots so every effective command can be undone.
//!
//! ## Core Components
//!
//! - **Model**: plans, areas, groups and the four shape variants
//!   (rectangle, ellipse, polygon, multipolygon)
//! - **Geometry**: clamping, resize-by-handle, grid and neighbour snapping,
//!   even partitioning, areas and bounding boxes
//! - **Ops**: union/difference/intersection through a pluggable
//!   [`PolygonSetOperations`] engine (backed by `csgrs`)
//! - **Naming / Groups / Factory**: area names, area groups, blank and
//!   sample plans
//! - **Interpreter**: the pure `apply(plan, command)` state transition
//! - **History**: bounded snapshot undo/redo
//! - **Designer state**: owned plan, selection and history for a UI
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── History (undo/redo snapshots)
//!   │     └── Interpreter (apply)
//!   │           ├── Geometry
//!   │           ├── Ops ── PolygonSetOperations (csgrs)
//!   │           ├── Naming
//!   │           └── Groups
//!   └── Serialization (plan documents)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use floorplan_designer::{Command, DesignerState, Rect};
//!
//! let mut state = DesignerState::new();
//! state.apply(Command::CreateRectAreas {
//!     rect: Rect::new(0.0, 0.0, 4.0, 3.0),
//!     partitions: 1,
//!     direction: Default::default(),
//! });
//! state.undo();
//! ```

pub mod commands;
pub mod designer_state;
pub mod factory;
pub mod geometry;
pub mod groups;
pub mod history;
pub mod interpreter;
pub mod model;
pub mod naming;
pub mod ops;
pub mod renderer;
pub mod serialization;

pub use commands::{Command, RectUpdate};
pub use designer_state::DesignerState;
pub use factory::{blank_plan, default_style, seeded_plan};
pub use geometry::{plan_total_area, shape_area, MirrorAxis, ResizeHandle, Size, SplitDirection};
pub use history::{CommandRecord, History};
pub use interpreter::{CommandOutcome, Interpreter};
pub use model::{
    Area, AreaGroup, AreaId, AreaStyle, BoundingBox, Canvas, Ellipse, GroupId, MultiPolygon,
    Plan, PlanMeta, PlanShape, Point, Polygon, Rect, Ring, Shape, ShapeKind,
};
pub use ops::{BooleanOp, CsgBooleanEngine, PolygonSetOperations, RingPolygon};
pub use renderer::{resolve_areas, shape_path, ResolvedArea};
pub use serialization::{export_plan, import_plan};
