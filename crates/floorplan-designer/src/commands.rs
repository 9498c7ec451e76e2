//! Commands understood by the interpreter.
//!
//! Commands are plain data with a serde `type` tag so they can travel over
//! any JSON boundary. Unrecognised tags deserialize to [`Command::Unknown`].

use floorplan_core::LengthUnit;
use serde::{Deserialize, Serialize};

use crate::geometry::{MirrorAxis, ResizeHandle, SplitDirection};
use crate::model::{Area, AreaId, Ellipse, GroupId, MultiPolygon, Plan, Point, Polygon, Rect};

fn default_true() -> bool {
    true
}

fn default_partitions() -> usize {
    1
}

/// Target rect for one entry of a batch update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectUpdate {
    pub id: AreaId,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
#[allow(clippy::large_enum_variant)]
pub enum Command {
    CreatePlan {
        name: String,
        width: f64,
        height: f64,
        #[serde(default)]
        units: LengthUnit,
    },
    ResizePlan { width: f64, height: f64 },
    SetViewport {
        #[serde(default)]
        zoom: Option<f64>,
        #[serde(default)]
        pan: Option<Point>,
    },
    LoadPlan { plan: Box<Plan> },
    CreateRectAreas {
        rect: Rect,
        #[serde(default = "default_partitions")]
        partitions: usize,
        #[serde(default)]
        direction: SplitDirection,
    },
    CreatePolygonArea {
        points: Vec<Point>,
        #[serde(default)]
        holes: Vec<Vec<Point>>,
        #[serde(default)]
        name: Option<String>,
    },
    CreateEllipseArea {
        ellipse: Ellipse,
        #[serde(default)]
        name: Option<String>,
    },
    PasteAreas { areas: Vec<Area>, dx: f64, dy: f64 },
    MoveRect {
        id: AreaId,
        dx: f64,
        dy: f64,
        #[serde(default)]
        snap: bool,
    },
    ResizeRect {
        id: AreaId,
        handle: ResizeHandle,
        dx: f64,
        dy: f64,
        #[serde(default)]
        snap: bool,
    },
    MovePolygon {
        id: AreaId,
        dx: f64,
        dy: f64,
        #[serde(default = "default_true")]
        clamp: bool,
    },
    MoveMultipolygon {
        id: AreaId,
        dx: f64,
        dy: f64,
        #[serde(default = "default_true")]
        clamp: bool,
    },
    MoveEllipse { id: AreaId, dx: f64, dy: f64 },
    SetRect { id: AreaId, rect: Rect },
    SetRects { updates: Vec<RectUpdate> },
    SetPolygon { id: AreaId, polygon: Polygon },
    SetMultipolygon {
        id: AreaId,
        multipolygon: MultiPolygon,
    },
    SetEllipse { id: AreaId, ellipse: Ellipse },
    RenameArea { id: AreaId, name: String },
    RecolorArea {
        id: AreaId,
        #[serde(default)]
        fill: Option<String>,
        #[serde(default)]
        stroke: Option<String>,
        #[serde(default)]
        stroke_width: Option<f64>,
    },
    MirrorArea { id: AreaId, axis: MirrorAxis },
    RotateArea {
        id: AreaId,
        angle: f64,
        #[serde(default)]
        snap: bool,
    },
    DeleteAreas { ids: Vec<AreaId> },
    DivideArea {
        id: AreaId,
        partitions: usize,
        #[serde(default)]
        direction: SplitDirection,
    },
    MergeAreas { ids: Vec<AreaId> },
    SubtractAreas { ids: Vec<AreaId> },
    ConvertToPolygon { ids: Vec<AreaId> },
    EllipseToRect { id: AreaId },
    RectToEllipse { id: AreaId },
    CreateGroup { name: String, area_ids: Vec<AreaId> },
    DeleteGroup { id: GroupId },
    SetGroupVisibility { id: GroupId, visible: bool },
    SetGroupLocked { id: GroupId, locked: bool },
    RenameGroup { id: GroupId, name: String },
    AddToGroup { id: GroupId, area_ids: Vec<AreaId> },
    RemoveFromGroup { id: GroupId, area_ids: Vec<AreaId> },
    SetSelection { ids: Vec<AreaId> },
    #[serde(other)]
    Unknown,
}

impl Command {
    /// Wire tag of the command.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreatePlan { .. } => "create_plan",
            Self::ResizePlan { .. } => "resize_plan",
            Self::SetViewport { .. } => "set_viewport",
            Self::LoadPlan { .. } => "load_plan",
            Self::CreateRectAreas { .. } => "create_rect_areas",
            Self::CreatePolygonArea { .. } => "create_polygon_area",
            Self::CreateEllipseArea { .. } => "create_ellipse_area",
            Self::PasteAreas { .. } => "paste_areas",
            Self::MoveRect { .. } => "move_rect",
            Self::ResizeRect { .. } => "resize_rect",
            Self::MovePolygon { .. } => "move_polygon",
            Self::MoveMultipolygon { .. } => "move_multipolygon",
            Self::MoveEllipse { .. } => "move_ellipse",
            Self::SetRect { .. } => "set_rect",
            Self::SetRects { .. } => "set_rects",
            Self::SetPolygon { .. } => "set_polygon",
            Self::SetMultipolygon { .. } => "set_multipolygon",
            Self::SetEllipse { .. } => "set_ellipse",
            Self::RenameArea { .. } => "rename_area",
            Self::RecolorArea { .. } => "recolor_area",
            Self::MirrorArea { .. } => "mirror_area",
            Self::RotateArea { .. } => "rotate_area",
            Self::DeleteAreas { .. } => "delete_areas",
            Self::DivideArea { .. } => "divide_area",
            Self::MergeAreas { .. } => "merge_areas",
            Self::SubtractAreas { .. } => "subtract_areas",
            Self::ConvertToPolygon { .. } => "convert_to_polygon",
            Self::EllipseToRect { .. } => "ellipse_to_rect",
            Self::RectToEllipse { .. } => "rect_to_ellipse",
            Self::CreateGroup { .. } => "create_group",
            Self::DeleteGroup { .. } => "delete_group",
            Self::SetGroupVisibility { .. } => "set_group_visibility",
            Self::SetGroupLocked { .. } => "set_group_locked",
            Self::RenameGroup { .. } => "rename_group",
            Self::AddToGroup { .. } => "add_to_group",
            Self::RemoveFromGroup { .. } => "remove_from_group",
            Self::SetSelection { .. } => "set_selection",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the name of the command for display.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreatePlan { .. } => "New Plan",
            Self::ResizePlan { .. } => "Resize Plan",
            Self::SetViewport { .. } => "Change View",
            Self::LoadPlan { .. } => "Load Plan",
            Self::CreateRectAreas { .. }
            | Self::CreatePolygonArea { .. }
            | Self::CreateEllipseArea { .. } => "Add Area",
            Self::PasteAreas { .. } => "Paste",
            Self::MoveRect { .. }
            | Self::MovePolygon { .. }
            | Self::MoveMultipolygon { .. }
            | Self::MoveEllipse { .. } => "Move",
            Self::ResizeRect { .. } => "Resize",
            Self::SetRect { .. }
            | Self::SetRects { .. }
            | Self::SetPolygon { .. }
            | Self::SetMultipolygon { .. }
            | Self::SetEllipse { .. } => "Edit Shape",
            Self::RenameArea { .. } => "Rename",
            Self::RecolorArea { .. } => "Change Colors",
            Self::MirrorArea { .. } => "Mirror",
            Self::RotateArea { .. } => "Rotate",
            Self::DeleteAreas { .. } => "Delete",
            Self::DivideArea { .. } => "Divide",
            Self::MergeAreas { .. } => "Merge",
            Self::SubtractAreas { .. } => "Subtract",
            Self::ConvertToPolygon { .. } => "Convert to Polygon",
            Self::EllipseToRect { .. } => "Convert to Rectangle",
            Self::RectToEllipse { .. } => "Convert to Ellipse",
            Self::CreateGroup { .. } => "Group",
            Self::DeleteGroup { .. } => "Ungroup",
            Self::SetGroupVisibility { .. } => "Toggle Group Visibility",
            Self::SetGroupLocked { .. } => "Toggle Group Lock",
            Self::RenameGroup { .. } => "Rename Group",
            Self::AddToGroup { .. } | Self::RemoveFromGroup { .. } => "Edit Group",
            Self::SetSelection { .. } => "Select",
            Self::Unknown => "Unknown",
        }
    }
}
