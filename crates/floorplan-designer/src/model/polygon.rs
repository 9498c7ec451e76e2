use lyon::path::Path;
use serde::{Deserialize, Serialize};

use super::{add_ring, BoundingBox, PlanShape, Point, Ring};
use crate::geometry::{polygon_area_with_holes, translate_points};
use crate::ops::RingPolygon;

/// Simple polygon with optional holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Ring,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<Ring>,
}

impl Polygon {
    pub fn new(points: Ring) -> Self {
        Self {
            points,
            holes: Vec::new(),
        }
    }

    pub fn with_holes(points: Ring, holes: Vec<Ring>) -> Self {
        Self { points, holes }
    }

    /// At least three finite points in the outer ring and in every hole.
    pub fn is_valid(&self) -> bool {
        ring_is_valid(&self.points) && self.holes.iter().all(|h| ring_is_valid(h))
    }

    /// Every ring point, outer ring first.
    pub fn all_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().chain(self.holes.iter().flatten())
    }

    pub fn map_points(&self, f: impl Fn(&Point) -> Point) -> Self {
        Self {
            points: self.points.iter().map(&f).collect(),
            holes: self
                .holes
                .iter()
                .map(|h| h.iter().map(&f).collect())
                .collect(),
        }
    }
}

impl PlanShape for Polygon {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        add_ring(&mut builder, &self.points);
        for hole in &self.holes {
            add_ring(&mut builder, hole);
        }
        builder.build()
    }

    fn rings(&self) -> Vec<RingPolygon> {
        vec![RingPolygon::new(self.points.clone(), self.holes.clone())]
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.all_points()).unwrap_or(BoundingBox::new(0.0, 0.0, 0.0, 0.0))
    }

    fn area(&self) -> f64 {
        polygon_area_with_holes(&self.points, &self.holes)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.points = translate_points(&self.points, dx, dy);
        for hole in &mut self.holes {
            *hole = translate_points(hole, dx, dy);
        }
    }
}

/// Several disjoint polygons treated as one area. `holes[i]` belongs to
/// `polygons[i]`; the list may be shorter than `polygons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    pub polygons: Vec<Ring>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<Vec<Ring>>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Ring>) -> Self {
        Self {
            polygons,
            holes: Vec::new(),
        }
    }

    pub fn with_holes(polygons: Vec<Ring>, holes: Vec<Vec<Ring>>) -> Self {
        Self { polygons, holes }
    }

    /// Holes of the `index`-th polygon, empty when none were recorded.
    pub fn holes_for(&self, index: usize) -> &[Ring] {
        self.holes.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_valid(&self) -> bool {
        !self.polygons.is_empty()
            && self.polygons.iter().all(|p| ring_is_valid(p))
            && self.holes.iter().flatten().all(|h| ring_is_valid(h))
    }

    pub fn all_points(&self) -> impl Iterator<Item = &Point> {
        self.polygons
            .iter()
            .flatten()
            .chain(self.holes.iter().flatten().flatten())
    }

    pub fn map_points(&self, f: impl Fn(&Point) -> Point) -> Self {
        Self {
            polygons: self
                .polygons
                .iter()
                .map(|ring| ring.iter().map(&f).collect())
                .collect(),
            holes: self
                .holes
                .iter()
                .map(|rings| {
                    rings
                        .iter()
                        .map(|ring| ring.iter().map(&f).collect())
                        .collect()
                })
                .collect(),
        }
    }
}

impl PlanShape for MultiPolygon {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        for (i, ring) in self.polygons.iter().enumerate() {
            add_ring(&mut builder, ring);
            for hole in self.holes_for(i) {
                add_ring(&mut builder, hole);
            }
        }
        builder.build()
    }

    fn rings(&self) -> Vec<RingPolygon> {
        self.polygons
            .iter()
            .enumerate()
            .map(|(i, ring)| RingPolygon::new(ring.clone(), self.holes_for(i).to_vec()))
            .collect()
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.all_points()).unwrap_or(BoundingBox::new(0.0, 0.0, 0.0, 0.0))
    }

    fn area(&self) -> f64 {
        self.polygons
            .iter()
            .enumerate()
            .map(|(i, ring)| polygon_area_with_holes(ring, self.holes_for(i)))
            .sum()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        *self = self.map_points(|p| p.translated(dx, dy));
    }
}

fn ring_is_valid(ring: &[Point]) -> bool {
    ring.len() >= 3 && ring.iter().all(|p| p.x.is_finite() && p.y.is_finite())
}
