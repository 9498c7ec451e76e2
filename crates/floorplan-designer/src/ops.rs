//! Polygon set operations
//!
//! Shapes are lowered to ring polygons, handed to a [`PolygonSetOperations`]
//! engine, and the resulting rings are lifted back into polygon or
//! multipolygon shapes. Rings travel to the engine closed (first point
//! repeated at the end) and come back open.

use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use floorplan_core::constants::AREA_EPSILON;

use crate::geometry::polygon_area;
use crate::model::{MultiPolygon, PlanShape, Point, Polygon, Ring, Shape};

/// One outer ring plus the holes cut into it.
#[derive(Debug, Clone, PartialEq)]
pub struct RingPolygon {
    pub exterior: Ring,
    pub holes: Vec<Ring>,
}

impl RingPolygon {
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        Self { exterior, holes }
    }

    /// Net enclosed area, holes subtracted.
    pub fn area(&self) -> f64 {
        crate::geometry::polygon_area_with_holes(&self.exterior, &self.holes)
    }
}

pub enum BooleanOp {
    Union,
    Difference,
    Intersection,
}

/// Boolean operations over sets of polygons-with-holes.
///
/// Each argument is a set of ring polygons interpreted as their union.
pub trait PolygonSetOperations {
    fn union(&self, a: &[RingPolygon], b: &[RingPolygon]) -> Vec<RingPolygon>;
    fn difference(&self, a: &[RingPolygon], b: &[RingPolygon]) -> Vec<RingPolygon>;
    fn intersection(&self, a: &[RingPolygon], b: &[RingPolygon]) -> Vec<RingPolygon>;
}

pub fn perform_boolean(
    engine: &dyn PolygonSetOperations,
    a: &[RingPolygon],
    b: &[RingPolygon],
    op: BooleanOp,
) -> Vec<RingPolygon> {
    match op {
        BooleanOp::Union => engine.union(a, b),
        BooleanOp::Difference => engine.difference(a, b),
        BooleanOp::Intersection => engine.intersection(a, b),
    }
}

/// Engine backed by `csgrs` sketches.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsgBooleanEngine;

impl CsgBooleanEngine {
    pub fn new() -> Self {
        Self
    }

    fn to_sketch(polygons: &[RingPolygon]) -> Sketch<()> {
        let mut sketch = Sketch::new();
        for polygon in polygons {
            let mut part = Sketch::polygon(&to_coords(&polygon.exterior), None);
            for hole in &polygon.holes {
                part = part.difference(&Sketch::polygon(&to_coords(hole), None));
            }
            sketch = sketch.union(&part);
        }
        sketch
    }

    fn from_sketch(sketch: &Sketch<()>) -> Vec<RingPolygon> {
        sketch
            .to_multipolygon()
            .into_iter()
            .map(|poly| {
                let outline = poly.exterior();
                let exterior = outline.coords().map(|c| Point::new(c.x, c.y)).collect();
                let mut holes = Vec::with_capacity(poly.interiors().len());
                for ring in poly.interiors() {
                    let points = ring.coords().map(|c| Point::new(c.x, c.y)).collect();
                    holes.push(open_ring(points));
                }
                RingPolygon::new(open_ring(exterior), holes)
            })
            .collect()
    }
}

impl PolygonSetOperations for CsgBooleanEngine {
    fn union(&self, a: &[RingPolygon], b: &[RingPolygon]) -> Vec<RingPolygon> {
        Self::from_sketch(&Self::to_sketch(a).union(&Self::to_sketch(b)))
    }

    fn difference(&self, a: &[RingPolygon], b: &[RingPolygon]) -> Vec<RingPolygon> {
        Self::from_sketch(&Self::to_sketch(a).difference(&Self::to_sketch(b)))
    }

    fn intersection(&self, a: &[RingPolygon], b: &[RingPolygon]) -> Vec<RingPolygon> {
        Self::from_sketch(&Self::to_sketch(a).intersection(&Self::to_sketch(b)))
    }
}

fn to_coords(ring: &[Point]) -> Vec<[f64; 2]> {
    close_ring(ring.to_vec())
        .iter()
        .map(|p| [p.x, p.y])
        .collect()
}

/// Repeats the first point at the end unless the ring is already closed.
pub fn close_ring(mut ring: Ring) -> Ring {
    if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
        if ring.len() > 1 && first != last {
            ring.push(first);
        }
    }
    ring
}

/// Drops the closing point if the ring repeats its first point.
pub fn open_ring(mut ring: Ring) -> Ring {
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

fn ring_is_usable(ring: &[Point]) -> bool {
    ring.len() >= 3 && polygon_area(ring) > AREA_EPSILON
}

/// Lifts engine output back into a shape. Degenerate rings are dropped;
/// `None` when nothing usable is left.
pub fn rings_to_shape(rings: Vec<RingPolygon>) -> Option<Shape> {
    let kept: Vec<RingPolygon> = rings
        .into_iter()
        .map(|rp| RingPolygon {
            exterior: open_ring(rp.exterior),
            holes: rp
                .holes
                .into_iter()
                .map(open_ring)
                .filter(|h| ring_is_usable(h))
                .collect(),
        })
        .filter(|rp| ring_is_usable(&rp.exterior))
        .collect();

    assemble(kept)
}

/// Union of all given shapes. `None` when fewer than two shapes are given or
/// the union is empty.
pub fn merge_shapes(engine: &dyn PolygonSetOperations, shapes: &[&Shape]) -> Option<Shape> {
    if shapes.len() < 2 {
        return None;
    }
    let mut acc = shapes[0].rings();
    for shape in &shapes[1..] {
        acc = perform_boolean(engine, &acc, &shape.rings(), BooleanOp::Union);
    }
    let merged = rings_to_shape(acc);
    if merged.is_none() {
        tracing::debug!("Merge of {} shapes produced no usable rings", shapes.len());
    }
    merged
}

/// `subject` minus the union of `cutters`. `None` when nothing remains.
pub fn subtract_shapes(
    engine: &dyn PolygonSetOperations,
    subject: &Shape,
    cutters: &[&Shape],
) -> Option<Shape> {
    let cutter_rings: Vec<RingPolygon> = cutters.iter().flat_map(|s| s.rings()).collect();
    let result = perform_boolean(
        engine,
        &subject.rings(),
        &cutter_rings,
        BooleanOp::Difference,
    );
    let shape = rings_to_shape(result);
    if shape.is_none() {
        tracing::debug!("Subtraction left nothing of the subject");
    }
    shape
}

/// Outlines of all shapes gathered into one polygon (single ring) or
/// multipolygon, without any boolean union.
pub fn convert_to_polygon(shapes: &[&Shape]) -> Option<Shape> {
    let mut parts: Vec<RingPolygon> = Vec::new();
    for shape in shapes {
        parts.extend(shape.rings());
    }
    parts.retain(|rp| rp.exterior.len() >= 3);

    assemble(parts)
}

/// One ring polygon becomes a polygon, several become a multipolygon.
fn assemble(mut parts: Vec<RingPolygon>) -> Option<Shape> {
    match parts.len() {
        0 => None,
        1 => {
            let rp = parts.remove(0);
            Some(Shape::Polygon(Polygon::with_holes(rp.exterior, rp.holes)))
        }
        _ => {
            let has_holes = parts.iter().any(|rp| !rp.holes.is_empty());
            let (polygons, holes): (Vec<Ring>, Vec<Vec<Ring>>) =
                parts.into_iter().map(|rp| (rp.exterior, rp.holes)).unzip();
            let holes = if has_holes { holes } else { Vec::new() };
            let multi = MultiPolygon::with_holes(polygons, holes);
            Some(Shape::MultiPolygon(multi))
        }
    }
}
