//! Geometry primitives
//!
//! Stateless functions over shape values. Nothing here mutates its inputs;
//! every function returns a fresh value.

use floorplan_core::constants::{ANGLE_SNAP_MAX, ANGLE_SNAP_STEP, NEIGHBOR_SNAP_FACTOR};
use nalgebra::{Matrix3, Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::model::{
    AreaId, BoundingBox, Ellipse, MultiPolygon, Plan, PlanShape, Point, Polygon, Rect, Shape,
};

/// Width and height of the drawable region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Drag handle on a rectangle's outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl ResizeHandle {
    fn north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    fn south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    fn east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    fn west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }
}

/// `Vertical` cuts produce side-by-side slices of equal width,
/// `Horizontal` cuts stack slices of equal height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// `Horizontal` flips left/right (x is reflected), `Vertical` flips
/// top/bottom (y is reflected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorAxis {
    Horizontal,
    Vertical,
}

/// Clamp that tolerates an inverted range by favouring `lo`.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

pub fn move_rect(rect: &Rect, dx: f64, dy: f64, bounds: Size) -> Rect {
    Rect {
        x: clamp(rect.x + dx, 0.0, bounds.width - rect.width),
        y: clamp(rect.y + dy, 0.0, bounds.height - rect.height),
        ..*rect
    }
}

/// Resizes `rect` by dragging `handle` by `(dx, dy)`.
///
/// The handle-local pass keeps the dragged edge between the opposite edge
/// (plus `min`) and the canvas border; the global pass then bounds the size
/// to `[min, bounds]` and pulls the origin back onto the canvas.
pub fn apply_rect_resize(
    rect: &Rect,
    handle: ResizeHandle,
    dx: f64,
    dy: f64,
    bounds: Size,
    min: f64,
) -> Rect {
    let mut r = *rect;

    if handle.east() {
        r.width = clamp(r.width + dx, min, bounds.width - r.x);
    }
    if handle.south() {
        r.height = clamp(r.height + dy, min, bounds.height - r.y);
    }
    if handle.west() {
        let right = r.x + r.width;
        let x = clamp(r.x + dx, 0.0, right - min);
        r.width = right - x;
        r.x = x;
    }
    if handle.north() {
        let bottom = r.y + r.height;
        let y = clamp(r.y + dy, 0.0, bottom - min);
        r.height = bottom - y;
        r.y = y;
    }

    fit_rect_to_bounds(&r, bounds, min)
}

/// Bounds the size to `[min, bounds]`, then slides the origin back onto the
/// canvas. A rect that already fits keeps its size.
pub fn fit_rect_to_bounds(rect: &Rect, bounds: Size, min: f64) -> Rect {
    let sized = Rect {
        width: clamp(rect.width, min, bounds.width),
        height: clamp(rect.height, min, bounds.height),
        ..*rect
    };
    move_rect(&sized, 0.0, 0.0, bounds)
}

/// Origin first, then size to whatever room is left.
pub fn constrain_rect_to_bounds(rect: &Rect, bounds: Size, min: f64) -> Rect {
    let x = clamp(rect.x, 0.0, bounds.width - min);
    let y = clamp(rect.y, 0.0, bounds.height - min);
    Rect {
        x,
        y,
        width: clamp(rect.width, min, bounds.width - x),
        height: clamp(rect.height, min, bounds.height - y),
    }
}

/// Edge coordinates of rectangles a snapped rect may cling to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeighborEdges {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl NeighborEdges {
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty() && self.ys.is_empty()
    }
}

/// Left/right and top/bottom edges of every rect area except `exclude`.
pub fn collect_neighbor_edges(plan: &Plan, exclude: &[AreaId]) -> NeighborEdges {
    let mut edges = NeighborEdges::default();
    for area in plan.areas.iter().filter(|a| !exclude.contains(&a.id)) {
        if let Shape::Rect(r) = &area.shape {
            edges.xs.extend([r.x, r.right()]);
            edges.ys.extend([r.y, r.bottom()]);
        }
    }
    edges
}

fn round_to(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

fn snap_edge(raw: f64, step: f64, candidates: &[f64]) -> f64 {
    let tolerance = NEIGHBOR_SNAP_FACTOR * step;
    candidates
        .iter()
        .copied()
        .filter(|c| (c - raw).abs() <= tolerance)
        .min_by(|a, b| (a - raw).abs().total_cmp(&(b - raw).abs()))
        .unwrap_or_else(|| round_to(raw, step))
}

/// Snaps all four edges to the grid, preferring a neighbour edge within
/// `0.6 * step`. Width and height follow from the snapped edges.
pub fn snap_rect(rect: &Rect, step: f64, neighbors: &NeighborEdges) -> Rect {
    if !(step.is_finite() && step > 0.0) {
        return *rect;
    }
    let left = snap_edge(rect.x, step, &neighbors.xs);
    let right = snap_edge(rect.right(), step, &neighbors.xs);
    let top = snap_edge(rect.y, step, &neighbors.ys);
    let bottom = snap_edge(rect.bottom(), step, &neighbors.ys);

    let width = if right - left > 0.0 {
        right - left
    } else {
        round_to(rect.width, step).max(step)
    };
    let height = if bottom - top > 0.0 {
        bottom - top
    } else {
        round_to(rect.height, step).max(step)
    };
    Rect::new(left, top, width, height)
}

/// `count` equal slices tiling `rect`; each slice size is computed from the
/// original rect so no rounding drift accumulates.
pub fn split_rect_evenly(rect: &Rect, count: usize, direction: SplitDirection) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as f64;
    (0..count)
        .map(|i| {
            let i = i as f64;
            match direction {
                SplitDirection::Vertical => {
                    let w = rect.width / n;
                    Rect::new(rect.x + w * i, rect.y, w, rect.height)
                }
                SplitDirection::Horizontal => {
                    let h = rect.height / n;
                    Rect::new(rect.x, rect.y + h * i, rect.width, h)
                }
            }
        })
        .collect()
}

/// Shoelace area, always non-negative.
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        sum += p.x * q.y - q.x * p.y;
    }
    (sum / 2.0).abs()
}

pub fn polygon_area_with_holes(points: &[Point], holes: &[Vec<Point>]) -> f64 {
    let holes_area: f64 = holes.iter().map(|h| polygon_area(h)).sum();
    (polygon_area(points) - holes_area).max(0.0)
}

pub fn shape_area(shape: &Shape) -> f64 {
    shape.area()
}

/// Sum of every area's shape area. Overlaps are counted twice.
pub fn plan_total_area(plan: &Plan) -> f64 {
    plan.areas.iter().map(|a| shape_area(&a.shape)).sum()
}

pub fn shape_bounding_box(shape: &Shape) -> BoundingBox {
    shape.bounding_box()
}

pub fn translate_points(points: &[Point], dx: f64, dy: f64) -> Vec<Point> {
    points.iter().map(|p| p.translated(dx, dy)).collect()
}

// Shrinks `d` toward zero so that [lo_edge + d, hi_edge + d] stays in
// [0, limit]. Never grows or flips it.
fn limit_axis(d: f64, lo_edge: f64, hi_edge: f64, limit: f64) -> f64 {
    if d > 0.0 {
        d.min((limit - hi_edge).max(0.0))
    } else if d < 0.0 {
        d.max((-lo_edge).min(0.0))
    } else {
        0.0
    }
}

fn clamp_delta_for_box(bb: Option<BoundingBox>, bounds: Size, dx: f64, dy: f64) -> (f64, f64) {
    match bb {
        Some(bb) => (
            limit_axis(dx, bb.min_x, bb.max_x, bounds.width),
            limit_axis(dy, bb.min_y, bb.max_y, bounds.height),
        ),
        None => (0.0, 0.0),
    }
}

pub fn clamp_delta_for_polygon(polygon: &Polygon, bounds: Size, dx: f64, dy: f64) -> (f64, f64) {
    let bbox = BoundingBox::from_points(polygon.all_points());
    clamp_delta_for_box(bbox, bounds, dx, dy)
}

pub fn clamp_delta_for_multipolygon(
    multi: &MultiPolygon,
    bounds: Size,
    dx: f64,
    dy: f64,
) -> (f64, f64) {
    let bbox = BoundingBox::from_points(multi.all_points());
    clamp_delta_for_box(bbox, bounds, dx, dy)
}

/// Normalizes to `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Nearest multiple of 15 in `0..=315` by circular distance.
pub fn snap_angle(angle: f64, enabled: bool) -> f64 {
    if !enabled || !angle.is_finite() {
        return angle;
    }
    let a = normalize_angle(angle);
    let steps = (ANGLE_SNAP_MAX / ANGLE_SNAP_STEP) as usize;
    let circular = |candidate: f64| {
        let d = (a - candidate).abs();
        d.min(360.0 - d)
    };
    (0..=steps)
        .map(|i| i as f64 * ANGLE_SNAP_STEP)
        .min_by(|x, y| circular(*x).total_cmp(&circular(*y)))
        .unwrap_or(0.0)
}

pub fn ellipse_to_rect(ellipse: &Ellipse) -> Rect {
    Rect::new(
        ellipse.cx - ellipse.rx,
        ellipse.cy - ellipse.ry,
        ellipse.rx * 2.0,
        ellipse.ry * 2.0,
    )
}

pub fn rect_to_ellipse(rect: &Rect) -> Ellipse {
    Ellipse::new(
        rect.x + rect.width / 2.0,
        rect.y + rect.height / 2.0,
        rect.width / 2.0,
        rect.height / 2.0,
    )
}

/// Shrinks radii to fit the canvas, then moves the centre on-canvas.
pub fn clamp_ellipse(ellipse: &Ellipse, bounds: Size) -> Ellipse {
    let rx = clamp(ellipse.rx, 0.0, bounds.width / 2.0);
    let ry = clamp(ellipse.ry, 0.0, bounds.height / 2.0);
    Ellipse::new(
        clamp(ellipse.cx, rx, bounds.width - rx),
        clamp(ellipse.cy, ry, bounds.height - ry),
        rx,
        ry,
    )
}

pub fn move_ellipse(ellipse: &Ellipse, dx: f64, dy: f64, bounds: Size) -> Ellipse {
    let moved = Ellipse {
        cx: ellipse.cx + dx,
        cy: ellipse.cy + dy,
        ..*ellipse
    };
    clamp_ellipse(&moved, bounds)
}

fn transform_points(points: &[Point], m: &Matrix3<f64>) -> Vec<Point> {
    points
        .iter()
        .map(|p| {
            let t = m.transform_point(&Point2::new(p.x, p.y));
            Point::new(t.x, t.y)
        })
        .collect()
}

fn about_center(center: Point, m: Matrix3<f64>) -> Matrix3<f64> {
    let to_center = Matrix3::new_translation(&Vector2::new(center.x, center.y));
    let from_center = Matrix3::new_translation(&Vector2::new(-center.x, -center.y));
    to_center * m * from_center
}

/// Rotates counter-clockwise by `degrees` about `center`.
pub fn rotate_points(points: &[Point], center: Point, degrees: f64) -> Vec<Point> {
    let m = about_center(center, Matrix3::new_rotation(degrees.to_radians()));
    transform_points(points, &m)
}

pub fn mirror_points(points: &[Point], center: Point, axis: MirrorAxis) -> Vec<Point> {
    let scale = match axis {
        MirrorAxis::Horizontal => Vector2::new(-1.0, 1.0),
        MirrorAxis::Vertical => Vector2::new(1.0, -1.0),
    };
    let m = about_center(center, Matrix3::new_nonuniform_scaling(&scale));
    transform_points(points, &m)
}
