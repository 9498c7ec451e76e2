use floorplan_designer::ops::{
    close_ring, convert_to_polygon, merge_shapes, open_ring, rings_to_shape, subtract_shapes,
};
use floorplan_designer::{
    CsgBooleanEngine, Ellipse, PlanShape, Polygon, PolygonSetOperations, Rect, RingPolygon,
    Shape,
};

use crate::support::{approx, pts, square};

fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::Rect(Rect::new(x, y, w, h))
}

/// Engine that never returns anything.
struct EmptyEngine;

impl PolygonSetOperations for EmptyEngine {
    fn union(&self, _: &[RingPolygon], _: &[RingPolygon]) -> Vec<RingPolygon> {
        Vec::new()
    }
    fn difference(&self, _: &[RingPolygon], _: &[RingPolygon]) -> Vec<RingPolygon> {
        Vec::new()
    }
    fn intersection(&self, _: &[RingPolygon], _: &[RingPolygon]) -> Vec<RingPolygon> {
        Vec::new()
    }
}

#[test]
fn test_ring_closing() {
    let open = square(0.0, 0.0, 1.0);
    let closed = close_ring(open.clone());
    assert_eq!(closed.len(), 5);
    assert_eq!(closed.first(), closed.last());
    assert_eq!(close_ring(closed.clone()), closed);
    assert_eq!(open_ring(closed), open);
}

#[test]
fn test_rect_and_ellipse_rings() {
    let rings = rect(0.0, 0.0, 2.0, 1.0).rings();
    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0].exterior.len(), 4);
    assert_eq!(close_ring(rings[0].exterior.clone()).len(), 5);

    let ellipse = Shape::Ellipse(Ellipse::new(0.0, 0.0, 2.0, 1.0)).rings();
    assert_eq!(ellipse[0].exterior.len(), 48);
}

#[test]
fn test_merge_touching_squares() {
    let engine = CsgBooleanEngine::new();
    let a = rect(0.0, 0.0, 1.0, 1.0);
    let b = rect(1.0, 0.0, 1.0, 1.0);
    let merged = merge_shapes(&engine, &[&a, &b]).expect("union is not empty");
    assert!(matches!(merged, Shape::Polygon(_) | Shape::MultiPolygon(_)));
    assert!(approx(merged.area(), 2.0));
}

#[test]
fn test_merge_overlapping_squares() {
    let engine = CsgBooleanEngine::new();
    let a = rect(0.0, 0.0, 2.0, 2.0);
    let b = rect(1.0, 1.0, 2.0, 2.0);
    let merged = merge_shapes(&engine, &[&a, &b]).expect("union is not empty");
    assert!(matches!(merged, Shape::Polygon(_)));
    assert!(approx(merged.area(), 7.0));
}

#[test]
fn test_merge_disjoint_gives_multipolygon() {
    let engine = CsgBooleanEngine::new();
    let a = rect(0.0, 0.0, 1.0, 1.0);
    let b = rect(5.0, 5.0, 1.0, 1.0);
    let merged = merge_shapes(&engine, &[&a, &b]).expect("union is not empty");
    match merged {
        Shape::MultiPolygon(m) => assert_eq!(m.polygons.len(), 2),
        other => panic!("expected multipolygon, got {:?}", other.kind()),
    }
}

#[test]
fn test_merge_needs_two_shapes() {
    let engine = CsgBooleanEngine::new();
    let single = rect(0.0, 0.0, 1.0, 1.0);
    assert!(merge_shapes(&engine, &[&single]).is_none());
}

#[test]
fn test_subtract_concentric_square_leaves_hole() {
    let engine = CsgBooleanEngine::new();
    let outer = rect(0.0, 0.0, 4.0, 4.0);
    let inner = rect(1.0, 1.0, 2.0, 2.0);
    let result = subtract_shapes(&engine, &outer, &[&inner]).expect("ring remains");
    match &result {
        Shape::Polygon(p) => {
            assert_eq!(p.holes.len(), 1);
            assert!(p.points.len() >= 4);
        }
        other => panic!("expected polygon, got {:?}", other.kind()),
    }
    assert!(approx(result.area(), 12.0));
}

#[test]
fn test_subtract_everything_is_none() {
    let engine = CsgBooleanEngine::new();
    let small = rect(1.0, 1.0, 1.0, 1.0);
    let big = rect(0.0, 0.0, 4.0, 4.0);
    assert!(subtract_shapes(&engine, &small, &[&big]).is_none());
}

#[test]
fn test_engine_can_be_substituted() {
    let a = rect(0.0, 0.0, 1.0, 1.0);
    let b = rect(1.0, 0.0, 1.0, 1.0);
    assert!(merge_shapes(&EmptyEngine, &[&a, &b]).is_none());
}

#[test]
fn test_rings_to_shape_drops_degenerate_rings() {
    let sliver = RingPolygon::new(pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]), Vec::new());
    let two_points = RingPolygon::new(pts(&[(0.0, 0.0), (1.0, 1.0)]), Vec::new());
    assert!(rings_to_shape(vec![sliver.clone(), two_points]).is_none());

    let closed = RingPolygon::new(close_ring(square(0.0, 0.0, 2.0)), Vec::new());
    match rings_to_shape(vec![closed, sliver]) {
        Some(Shape::Polygon(p)) => assert_eq!(p.points, square(0.0, 0.0, 2.0)),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_convert_rect_to_polygon() {
    match convert_to_polygon(&[&rect(1.0, 1.0, 2.0, 3.0)]) {
        Some(Shape::Polygon(p)) => {
            let corners = pts(&[(1.0, 1.0), (3.0, 1.0), (3.0, 4.0), (1.0, 4.0)]);
            assert_eq!(p.points, corners);
            assert!(p.holes.is_empty());
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_convert_many_without_union() {
    let a = rect(0.0, 0.0, 2.0, 2.0);
    let b = Shape::Polygon(Polygon::new(square(1.0, 1.0, 2.0)));
    match convert_to_polygon(&[&a, &b]) {
        Some(Shape::MultiPolygon(m)) => {
            assert_eq!(m.polygons.len(), 2);
            // overlapping outlines are kept as-is
            assert!(approx(Shape::MultiPolygon(m).area(), 8.0));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_ring_polygon_area() {
    let rp = RingPolygon::new(square(0.0, 0.0, 3.0), vec![square(1.0, 1.0, 1.0)]);
    assert_eq!(rp.area(), 8.0);
}
