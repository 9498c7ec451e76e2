use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use floorplan_core::constants::ELLIPSE_SEGMENTS;

use super::{BoundingBox, PlanShape, Point, Ring};
use crate::ops::RingPolygon;

/// Axis-aligned ellipse; a circle when `rx == ry`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self { cx, cy, rx, ry }
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::new(cx, cy, r, r)
    }

    pub fn is_valid(&self) -> bool {
        [self.cx, self.cy, self.rx, self.ry]
            .iter()
            .all(|v| v.is_finite())
            && self.rx > 0.0
            && self.ry > 0.0
    }

    /// Samples the outline into `segments` evenly spaced points.
    pub fn sample(&self, segments: usize) -> Ring {
        let segments = segments.max(3);
        (0..segments)
            .map(|i| {
                let theta = 2.0 * std::f64::consts::PI * (i as f64) / (segments as f64);
                Point::new(
                    self.cx + self.rx * theta.cos(),
                    self.cy + self.ry * theta.sin(),
                )
            })
            .collect()
    }
}

impl PlanShape for Ellipse {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_ellipse(
            point(self.cx as f32, self.cy as f32),
            lyon::math::vector(self.rx as f32, self.ry as f32),
            lyon::math::Angle::radians(0.0),
            lyon::path::Winding::Positive,
        );
        builder.build()
    }

    fn rings(&self) -> Vec<RingPolygon> {
        vec![RingPolygon::new(self.sample(ELLIPSE_SEGMENTS), Vec::new())]
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.cx - self.rx,
            self.cy - self.ry,
            self.cx + self.rx,
            self.cy + self.ry,
        )
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * self.rx.abs() * self.ry.abs()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.cx += dx;
        self.cy += dy;
    }
}
