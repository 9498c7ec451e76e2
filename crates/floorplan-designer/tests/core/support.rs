use floorplan_core::LengthUnit;
use floorplan_designer::{
    Area, AreaId, AreaStyle, Ellipse, MultiPolygon, Plan, Point, Polygon, Rect, Shape,
};

pub fn empty_plan() -> Plan {
    Plan::new("Test plan", 10.0, 10.0, LengthUnit::Meters)
}

pub fn rect_area(id: &str, name: &str, x: f64, y: f64, w: f64, h: f64) -> Area {
    Area::with_id(
        AreaId::from(id),
        name,
        Shape::Rect(Rect::new(x, y, w, h)),
        &AreaStyle::default(),
    )
}

pub fn polygon_area(id: &str, points: &[(f64, f64)]) -> Area {
    Area::with_id(
        AreaId::from(id),
        id,
        Shape::Polygon(Polygon::new(pts(points))),
        &AreaStyle::default(),
    )
}

pub fn pts(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|(x, y)| Point::new(*x, *y)).collect()
}

pub fn square(x: f64, y: f64, size: f64) -> Vec<Point> {
    let (right, bottom) = (x + size, y + size);
    pts(&[(x, y), (right, y), (right, bottom), (x, bottom)])
}

/// Plan with one of each shape variant.
pub fn mixed_plan() -> Plan {
    let mut plan = empty_plan();
    plan.areas.push(rect_area("r", "Hall", 0.0, 0.0, 4.0, 2.0));
    plan.areas.push(Area::with_id(
        AreaId::from("e"),
        "Pond",
        Shape::Ellipse(Ellipse::new(7.0, 7.0, 1.0, 0.5)),
        &AreaStyle::default(),
    ));
    plan.areas.push(Area::with_id(
        AreaId::from("p"),
        "Courtyard",
        Shape::Polygon(Polygon::with_holes(
            square(0.0, 4.0, 4.0),
            vec![square(1.0, 5.0, 2.0)],
        )),
        &AreaStyle::default(),
    ));
    plan.areas.push(Area::with_id(
        AreaId::from("m"),
        "Sheds",
        Shape::MultiPolygon(MultiPolygon::new(vec![
            square(5.0, 0.0, 1.0),
            square(7.0, 0.0, 1.0),
        ])),
        &AreaStyle::default(),
    ));
    plan
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
