use lyon::path::Path;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ops::RingPolygon;

mod area;
mod ellipse;
mod plan;
mod polygon;
mod rectangle;

pub use area::{Area, AreaId, AreaStyle};
pub use ellipse::Ellipse;
pub use plan::{AreaGroup, Canvas, GroupId, Plan, PlanMeta};
pub use polygon::{MultiPolygon, Polygon};
pub use rectangle::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Ordered boundary of a polygon or hole. Stored open: the first point is
/// not repeated at the end.
pub type Ring = Vec<Point>;

/// Axis-aligned extent of a shape in plan coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounding box of a point cloud; `None` when the iterator is empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bb = Self::new(first.x, first.y, first.x, first.y);
        for p in iter {
            bb.min_x = bb.min_x.min(p.x);
            bb.min_y = bb.min_y.min(p.y);
            bb.max_x = bb.max_x.max(p.x);
            bb.max_y = bb.max_y.max(p.y);
        }
        Some(bb)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.width(), self.height())
    }
}

/// Behaviour shared by every shape variant an area can carry.
pub trait PlanShape {
    /// Outline as a lyon path for the rendering layer.
    fn render(&self) -> Path;
    /// Ring representation handed to the polygon set-operations engine.
    fn rings(&self) -> Vec<RingPolygon>;
    fn bounding_box(&self) -> BoundingBox;
    /// Enclosed area, holes subtracted.
    fn area(&self) -> f64;
    fn translate(&mut self, dx: f64, dy: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rect,
    Ellipse,
    Polygon,
    MultiPolygon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect => write!(f, "rectangle"),
            Self::Ellipse => write!(f, "ellipse"),
            Self::Polygon => write!(f, "polygon"),
            Self::MultiPolygon => write!(f, "multipolygon"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rect(Rect),
    Ellipse(Ellipse),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl PlanShape for Shape {
    fn render(&self) -> Path {
        match self {
            Shape::Rect(s) => s.render(),
            Shape::Ellipse(s) => s.render(),
            Shape::Polygon(s) => s.render(),
            Shape::MultiPolygon(s) => s.render(),
        }
    }

    fn rings(&self) -> Vec<RingPolygon> {
        match self {
            Shape::Rect(s) => s.rings(),
            Shape::Ellipse(s) => s.rings(),
            Shape::Polygon(s) => s.rings(),
            Shape::MultiPolygon(s) => s.rings(),
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Rect(s) => s.bounding_box(),
            Shape::Ellipse(s) => s.bounding_box(),
            Shape::Polygon(s) => s.bounding_box(),
            Shape::MultiPolygon(s) => s.bounding_box(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            Shape::Rect(s) => s.area(),
            Shape::Ellipse(s) => s.area(),
            Shape::Polygon(s) => s.area(),
            Shape::MultiPolygon(s) => s.area(),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rect(s) => s.translate(dx, dy),
            Shape::Ellipse(s) => s.translate(dx, dy),
            Shape::Polygon(s) => s.translate(dx, dy),
            Shape::MultiPolygon(s) => s.translate(dx, dy),
        }
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::MultiPolygon(_) => ShapeKind::MultiPolygon,
        }
    }

    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Shape::Rect(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            Shape::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_multipolygon(&self) -> Option<&MultiPolygon> {
        match self {
            Shape::MultiPolygon(m) => Some(m),
            _ => None,
        }
    }
}

/// Appends one ring to a lyon path builder as a closed sub-path.
pub(crate) fn add_ring(builder: &mut lyon::path::path::Builder, ring: &[Point]) {
    let mut iter = ring.iter();
    let Some(first) = iter.next() else {
        return;
    };
    builder.begin(lyon::math::point(first.x as f32, first.y as f32));
    for p in iter {
        builder.line_to(lyon::math::point(p.x as f32, p.y as f32));
    }
    builder.close();
}
