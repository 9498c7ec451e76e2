use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use super::{BoundingBox, PlanShape, Point};
use crate::ops::RingPolygon;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Finite coordinates and strictly positive size.
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Corners in clockwise screen order starting at the origin.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }
}

impl PlanShape for Rect {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_rectangle(
            &lyon::math::Box2D::new(
                point(self.x as f32, self.y as f32),
                point(self.right() as f32, self.bottom() as f32),
            ),
            lyon::path::Winding::Positive,
        );
        builder.build()
    }

    fn rings(&self) -> Vec<RingPolygon> {
        vec![RingPolygon::new(self.corners().to_vec(), Vec::new())]
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.right(), self.bottom())
    }

    fn area(&self) -> f64 {
        (self.width * self.height).abs()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}
