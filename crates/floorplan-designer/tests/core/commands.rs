use floorplan_core::LengthUnit;
use floorplan_designer::geometry::{MirrorAxis, ResizeHandle, SplitDirection};
use floorplan_designer::{
    Area, AreaId, AreaStyle, Command, CommandOutcome, Ellipse, GroupId, Interpreter, Plan,
    PlanShape, Point, Polygon, Rect, RectUpdate, Shape,
};

use proptest::prelude::*;

use crate::support::{approx, empty_plan, mixed_plan, polygon_area, pts, rect_area, square};

fn apply(plan: &Plan, command: Command) -> CommandOutcome {
    Interpreter::new().apply(plan, &command)
}

fn id(s: &str) -> AreaId {
    AreaId::from(s)
}

fn shape_of<'a>(plan: &'a Plan, area: &str) -> &'a Shape {
    &plan.find_area(&id(area)).expect("area exists").shape
}

fn rect_of(plan: &Plan, area: &str) -> Rect {
    *shape_of(plan, area).as_rect().expect("rect area")
}

fn ellipse_of(plan: &Plan, area: &str) -> Ellipse {
    *shape_of(plan, area).as_ellipse().expect("ellipse area")
}

fn polygon_of<'a>(plan: &'a Plan, area: &str) -> &'a Polygon {
    shape_of(plan, area).as_polygon().expect("polygon area")
}

fn assert_on_canvas(plan: &Plan) {
    for area in &plan.areas {
        let bb = match &area.shape {
            Shape::Rect(_) | Shape::Ellipse(_) => area.shape.bounding_box(),
            _ => continue,
        };
        let name = &area.name;
        assert!(bb.min_x >= -1e-9, "{name} off canvas");
        assert!(bb.min_y >= -1e-9, "{name} off canvas");
        assert!(bb.max_x <= plan.canvas.width + 1e-9, "{name} off canvas");
        assert!(bb.max_y <= plan.canvas.height + 1e-9, "{name} off canvas");
    }
}

#[test]
fn test_invalid_references_are_noops() {
    let plan = mixed_plan();
    let missing = id("nope");
    let commands = vec![
        Command::MoveRect {
            id: missing.clone(),
            dx: 1.0,
            dy: 1.0,
            snap: false,
        },
        Command::ResizeRect {
            id: missing.clone(),
            handle: ResizeHandle::Se,
            dx: 1.0,
            dy: 1.0,
            snap: false,
        },
        Command::MovePolygon {
            id: missing.clone(),
            dx: 1.0,
            dy: 0.0,
            clamp: true,
        },
        Command::SetRect {
            id: missing.clone(),
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
        },
        Command::RenameArea {
            id: missing.clone(),
            name: "x".into(),
        },
        Command::MirrorArea {
            id: missing.clone(),
            axis: MirrorAxis::Vertical,
        },
        Command::DeleteAreas {
            ids: vec![missing.clone()],
        },
        Command::DivideArea {
            id: missing.clone(),
            partitions: 2,
            direction: SplitDirection::Vertical,
        },
        Command::MergeAreas {
            ids: vec![missing.clone(), id("r")],
        },
        Command::SubtractAreas {
            ids: vec![id("r"), missing.clone()],
        },
        Command::ConvertToPolygon {
            ids: vec![missing.clone()],
        },
        Command::DeleteGroup {
            id: GroupId::from("nope"),
        },
        Command::Unknown,
    ];
    for command in commands {
        let outcome = apply(&plan, command.clone());
        assert_eq!(outcome.plan, plan, "{} changed the plan", command.kind());
        assert!(
            outcome.description.is_none(),
            "{} described a change",
            command.kind()
        );
    }
}

#[test]
fn test_mismatched_variant_is_noop() {
    let plan = mixed_plan();
    let outcome = apply(
        &plan,
        Command::MovePolygon {
            id: id("r"),
            dx: 1.0,
            dy: 1.0,
            clamp: true,
        },
    );
    assert_eq!(outcome.plan, plan);

    let outcome = apply(
        &plan,
        Command::SetEllipse {
            id: id("p"),
            ellipse: Ellipse::circle(1.0, 1.0, 1.0),
        },
    );
    assert_eq!(outcome.plan, plan);

    let outcome = apply(&plan, Command::RectToEllipse { id: id("e") });
    assert_eq!(outcome.plan, plan);
}

#[test]
fn test_effective_command_touches_updated_at_only_in_meta() {
    let plan = mixed_plan();
    let outcome = apply(
        &plan,
        Command::RenameArea {
            id: id("r"),
            name: "Lobby".into(),
        },
    );
    assert_ne!(outcome.plan, plan);
    assert_eq!(outcome.plan.meta.created_at, plan.meta.created_at);
    assert!(outcome.plan.meta.updated_at >= plan.meta.updated_at);
    assert_eq!(outcome.plan.find_area(&id("r")).unwrap().name, "Lobby");
    assert_eq!(outcome.selection, Some(vec![id("r")]));
    assert!(outcome.description.is_some());
    // input untouched
    assert_eq!(plan.find_area(&id("r")).unwrap().name, "Hall");
}

#[test]
fn test_create_plan_and_resize() {
    let plan = mixed_plan();
    let outcome = apply(
        &plan,
        Command::CreatePlan {
            name: "Fresh".into(),
            width: 30.0,
            height: 20.0,
            units: LengthUnit::Feet,
        },
    );
    assert!(outcome.plan.areas.is_empty());
    assert_eq!(outcome.plan.canvas.width, 30.0);
    assert_eq!(outcome.selection, Some(vec![]));

    let invalid = apply(
        &plan,
        Command::CreatePlan {
            name: "Bad".into(),
            width: 0.0,
            height: 20.0,
            units: LengthUnit::default(),
        },
    );
    assert_eq!(invalid.plan, plan);

    let resized = apply(
        &plan,
        Command::ResizePlan {
            width: 0.2,
            height: 40.0,
        },
    );
    assert_eq!(resized.plan.canvas.width, 1.0);
    assert_eq!(resized.plan.canvas.height, 40.0);
    assert_eq!(resized.selection, None);
}

#[test]
fn test_shrinking_canvas_pulls_shapes_inside() {
    let mut plan = empty_plan();
    plan.areas.push(rect_area("a", "A", 2.0, 2.0, 8.0, 8.0));
    plan.areas.push(rect_area("b", "B", 1.0, 1.0, 1.0, 1.0));
    let pond = Shape::Ellipse(Ellipse::new(7.0, 7.0, 2.0, 2.0));
    let style = AreaStyle::default();
    let pond = Area::with_id(id("c"), "Pond", pond, &style);
    plan.areas.push(pond);

    let shrunk = apply(
        &plan,
        Command::ResizePlan {
            width: 5.0,
            height: 5.0,
        },
    );
    assert_eq!(rect_of(&shrunk.plan, "a"), Rect::new(2.0, 2.0, 3.0, 3.0));
    assert_eq!(rect_of(&shrunk.plan, "b"), Rect::new(1.0, 1.0, 1.0, 1.0));
    assert_eq!(
        ellipse_of(&shrunk.plan, "c"),
        Ellipse::new(3.0, 3.0, 2.0, 2.0)
    );
    assert_on_canvas(&shrunk.plan);

    let moved = apply(
        &shrunk.plan,
        Command::MoveRect {
            id: id("a"),
            dx: 10.0,
            dy: -10.0,
            snap: false,
        },
    );
    assert_eq!(rect_of(&moved.plan, "a"), Rect::new(2.0, 0.0, 3.0, 3.0));
    assert_on_canvas(&moved.plan);
}

#[test]
fn test_viewport_zoom_floor() {
    let plan = empty_plan();
    let outcome = apply(
        &plan,
        Command::SetViewport {
            zoom: Some(0.01),
            pan: Some(Point::new(-5.0, 3.0)),
        },
    );
    assert_eq!(outcome.plan.canvas.zoom, 0.1);
    assert_eq!(outcome.plan.canvas.pan, Point::new(-5.0, 3.0));
}

#[test]
fn test_create_rect_areas_clamped_and_partitioned() {
    let plan = empty_plan();
    let outcome = apply(
        &plan,
        Command::CreateRectAreas {
            rect: Rect::new(6.0, -2.0, 8.0, 4.0),
            partitions: 2,
            direction: SplitDirection::Vertical,
        },
    );
    let ids = outcome.selection.clone().unwrap();
    assert_eq!(ids.len(), 2);
    assert_eq!(outcome.plan.areas.len(), 2);
    assert_eq!(outcome.plan.areas[0].name, "Area 1");
    assert_eq!(outcome.plan.areas[1].name, "Area 2");
    let first = outcome.plan.areas[0].shape.as_rect().unwrap();
    let second = outcome.plan.areas[1].shape.as_rect().unwrap();
    assert_eq!(*first, Rect::new(6.0, 0.0, 2.0, 4.0));
    assert_eq!(*second, Rect::new(8.0, 0.0, 2.0, 4.0));
    assert_on_canvas(&outcome.plan);

    let degenerate = apply(
        &plan,
        Command::CreateRectAreas {
            rect: Rect::new(1.0, 1.0, 0.0, 4.0),
            partitions: 1,
            direction: SplitDirection::Vertical,
        },
    );
    assert_eq!(degenerate.plan, plan);
}

#[test]
fn test_create_polygon_and_ellipse() {
    let plan = empty_plan();
    let outcome = apply(
        &plan,
        Command::CreatePolygonArea {
            points: pts(&[(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)]),
            holes: vec![],
            name: Some("Nook".into()),
        },
    );
    assert_eq!(outcome.plan.areas[0].name, "Nook");

    let too_few = apply(
        &plan,
        Command::CreatePolygonArea {
            points: pts(&[(0.0, 0.0), (3.0, 0.0)]),
            holes: vec![],
            name: None,
        },
    );
    assert_eq!(too_few.plan, plan);

    let ellipse = apply(
        &plan,
        Command::CreateEllipseArea {
            ellipse: Ellipse::new(9.5, 5.0, 2.0, 1.0),
            name: None,
        },
    );
    let created = ellipse.plan.areas[0].shape.as_ellipse().unwrap();
    assert_eq!(*created, Ellipse::new(8.0, 5.0, 2.0, 1.0));
    assert_on_canvas(&ellipse.plan);
}

#[test]
fn test_paste_offsets_clamps_and_renames() {
    let plan = mixed_plan();
    let mut broken = polygon_area("bad", &[(0.0, 0.0), (1.0, 1.0)]);
    broken.name = "Broken".into();
    let areas = vec![plan.find_area(&id("r")).unwrap().clone(), broken];
    let outcome = apply(
        &plan,
        Command::PasteAreas {
            areas,
            dx: 8.0,
            dy: 1.0,
        },
    );

    let ids = outcome.selection.unwrap();
    assert_eq!(ids.len(), 1);
    let pasted = outcome.plan.find_area(&ids[0]).unwrap();
    assert_ne!(pasted.id, id("r"));
    assert_eq!(pasted.name, "Hall (2)");
    let rect = *pasted.shape.as_rect().unwrap();
    assert_eq!(rect, Rect::new(8.0, 1.0, 2.0, 2.0));
    assert_on_canvas(&outcome.plan);
    assert_eq!(outcome.plan.areas.len(), plan.areas.len() + 1);
}

#[test]
fn test_move_rect_snaps_to_neighbor() {
    let mut plan = empty_plan();
    plan.areas.push(rect_area("a", "A", 0.0, 0.0, 2.0, 2.0));
    plan.areas.push(rect_area("b", "B", 5.0, 0.0, 2.0, 2.0));

    let outcome = apply(
        &plan,
        Command::MoveRect {
            id: id("a"),
            dx: 2.8,
            dy: 0.0,
            snap: true,
        },
    );
    let moved = rect_of(&outcome.plan, "a");
    assert_eq!(moved.right(), 5.0);
    assert_eq!(moved.x, 3.0);
    assert_eq!(outcome.selection, Some(vec![id("a")]));
}

#[test]
fn test_snapped_move_on_odd_canvas_stays_inside() {
    let mut plan = Plan::new("Odd", 10.3, 10.3, LengthUnit::Meters);
    plan.areas.push(rect_area("a", "A", 0.0, 0.0, 10.3, 2.0));

    let outcome = apply(
        &plan,
        Command::MoveRect {
            id: id("a"),
            dx: 0.0,
            dy: 1.0,
            snap: true,
        },
    );
    assert_eq!(rect_of(&outcome.plan, "a"), Rect::new(0.0, 1.0, 10.3, 2.0));
    assert_on_canvas(&outcome.plan);
}

#[test]
fn test_move_and_resize_rect_clamped() {
    let mut plan = empty_plan();
    plan.areas.push(rect_area("a", "A", 1.0, 1.0, 2.0, 2.0));
    let moved = apply(
        &plan,
        Command::MoveRect {
            id: id("a"),
            dx: 50.0,
            dy: -50.0,
            snap: false,
        },
    );
    assert_eq!(rect_of(&moved.plan, "a"), Rect::new(8.0, 0.0, 2.0, 2.0));

    let resized = apply(
        &plan,
        Command::ResizeRect {
            id: id("a"),
            handle: ResizeHandle::Se,
            dx: 50.0,
            dy: 1.0,
            snap: false,
        },
    );
    assert_eq!(rect_of(&resized.plan, "a"), Rect::new(1.0, 1.0, 9.0, 3.0));
    assert_on_canvas(&resized.plan);
}

#[test]
fn test_move_polygon_clamped_delta() {
    let plan = mixed_plan();
    let outcome = apply(
        &plan,
        Command::MovePolygon {
            id: id("p"),
            dx: 20.0,
            dy: 0.0,
            clamp: true,
        },
    );
    let poly = polygon_of(&outcome.plan, "p");
    assert_eq!(poly.points, square(6.0, 4.0, 4.0));
    assert_eq!(poly.holes, vec![square(7.0, 5.0, 2.0)]);

    let free = apply(
        &plan,
        Command::MovePolygon {
            id: id("p"),
            dx: 20.0,
            dy: 0.0,
            clamp: false,
        },
    );
    assert_eq!(polygon_of(&free.plan, "p").points[0], Point::new(20.0, 4.0));
}

#[test]
fn test_move_multipolygon_and_ellipse() {
    let plan = mixed_plan();
    let outcome = apply(
        &plan,
        Command::MoveMultipolygon {
            id: id("m"),
            dx: 0.0,
            dy: 3.0,
            clamp: true,
        },
    );
    let multi = shape_of(&outcome.plan, "m").as_multipolygon().unwrap();
    assert_eq!(multi.polygons[1], square(7.0, 3.0, 1.0));

    let outcome = apply(
        &plan,
        Command::MoveEllipse {
            id: id("e"),
            dx: 10.0,
            dy: 0.0,
        },
    );
    assert_eq!(ellipse_of(&outcome.plan, "e").cx, 9.0);
    assert_on_canvas(&outcome.plan);
}

#[test]
fn test_set_shape_commands() {
    let plan = mixed_plan();
    let outcome = apply(
        &plan,
        Command::SetRect {
            id: id("r"),
            rect: Rect::new(8.0, 8.0, 5.0, 5.0),
        },
    );
    assert_eq!(rect_of(&outcome.plan, "r"), Rect::new(8.0, 8.0, 2.0, 2.0));

    let outcome = apply(
        &plan,
        Command::SetPolygon {
            id: id("p"),
            polygon: Polygon::new(square(1.0, 1.0, 1.0)),
        },
    );
    assert!(polygon_of(&outcome.plan, "p").holes.is_empty());

    let bad = apply(
        &plan,
        Command::SetPolygon {
            id: id("p"),
            polygon: Polygon::new(pts(&[(0.0, 0.0), (1.0, 0.0)])),
        },
    );
    assert_eq!(bad.plan, plan);
}

#[test]
fn test_batch_set_rects_skips_invalid_entries() {
    let plan = mixed_plan();
    let unit = Rect::new(1.0, 1.0, 1.0, 1.0);
    let outcome = apply(
        &plan,
        Command::SetRects {
            updates: vec![
                RectUpdate {
                    id: id("r"),
                    rect: unit,
                },
                RectUpdate {
                    id: id("p"),
                    rect: unit,
                },
                RectUpdate {
                    id: id("missing"),
                    rect: unit,
                },
            ],
        },
    );
    assert_eq!(outcome.selection, Some(vec![id("r")]));
    assert_eq!(rect_of(&outcome.plan, "r"), unit);
}

#[test]
fn test_recolor_area() {
    let plan = mixed_plan();
    let outcome = apply(
        &plan,
        Command::RecolorArea {
            id: id("r"),
            fill: Some("#ff0000".into()),
            stroke: None,
            stroke_width: Some(0.2),
        },
    );
    let area = outcome.plan.find_area(&id("r")).unwrap();
    assert_eq!(area.fill, "#ff0000");
    assert_eq!(area.stroke, plan.find_area(&id("r")).unwrap().stroke);
    assert_eq!(area.stroke_width, 0.2);
}

#[test]
fn test_mirror_polygon_and_symmetric_shapes() {
    let mut plan = empty_plan();
    let triangle = polygon_area("t", &[(0.0, 0.0), (2.0, 0.0), (0.0, 1.0)]);
    plan.areas.push(triangle);
    plan.areas.push(rect_area("r", "R", 1.0, 1.0, 1.0, 1.0));

    let outcome = apply(
        &plan,
        Command::MirrorArea {
            id: id("t"),
            axis: MirrorAxis::Horizontal,
        },
    );
    assert_eq!(
        polygon_of(&outcome.plan, "t").points,
        pts(&[(2.0, 0.0), (0.0, 0.0), (2.0, 1.0)])
    );

    let rect = apply(
        &plan,
        Command::MirrorArea {
            id: id("r"),
            axis: MirrorAxis::Vertical,
        },
    );
    assert_eq!(rect.plan, plan);
}

#[test]
fn test_rotate_polygon_with_snap() {
    let mut plan = empty_plan();
    let slab = polygon_area("s", &[(2.0, 2.0), (6.0, 2.0), (6.0, 4.0), (2.0, 4.0)]);
    plan.areas.push(slab);
    let outcome = apply(
        &plan,
        Command::RotateArea {
            id: id("s"),
            angle: 88.0,
            snap: true,
        },
    );
    assert_eq!(polygon_of(&outcome.plan, "s").points.len(), 4);
    let bb = shape_of(&outcome.plan, "s").bounding_box();
    assert!(approx(bb.width(), 2.0));
    assert!(approx(bb.height(), 4.0));
    assert!(approx(bb.center().x, 4.0));
    assert!(approx(bb.center().y, 3.0));

    let rect_plan = mixed_plan();
    let rect = apply(
        &rect_plan,
        Command::RotateArea {
            id: id("r"),
            angle: 45.0,
            snap: false,
        },
    );
    assert_eq!(rect.plan, rect_plan);
}

#[test]
fn test_delete_areas_leaves_groups_alone() {
    let plan = mixed_plan();
    let grouped = apply(
        &plan,
        Command::CreateGroup {
            name: "Outside".into(),
            area_ids: vec![id("e"), id("m")],
        },
    )
    .plan;
    let outcome = apply(
        &grouped,
        Command::DeleteAreas {
            ids: vec![id("e"), id("gone")],
        },
    );
    assert!(outcome.plan.find_area(&id("e")).is_none());
    assert_eq!(outcome.plan.areas.len(), plan.areas.len() - 1);
    assert_eq!(outcome.plan.area_groups[0].area_ids, vec![id("e"), id("m")]);
    assert_eq!(outcome.selection, Some(vec![]));
}

#[test]
fn test_divide_rect_scenario() {
    let mut plan = empty_plan();
    plan.areas
        .push(rect_area("room", "Room", 0.0, 0.0, 4.0, 2.0));
    let outcome = apply(
        &plan,
        Command::DivideArea {
            id: id("room"),
            partitions: 2,
            direction: SplitDirection::Vertical,
        },
    );
    assert!(outcome.plan.find_area(&id("room")).is_none());
    assert_eq!(outcome.plan.areas.len(), 2);
    let rects: Vec<Rect> = outcome
        .plan
        .areas
        .iter()
        .map(|a| *a.shape.as_rect().unwrap())
        .collect();
    assert_eq!(
        rects,
        vec![Rect::new(0.0, 0.0, 2.0, 2.0), Rect::new(2.0, 0.0, 2.0, 2.0)]
    );
    for area in &outcome.plan.areas {
        assert_eq!(area.parent_id, Some(id("room")));
    }
    assert_eq!(outcome.plan.areas[0].name, "Room-1");
    assert_eq!(outcome.plan.areas[1].name, "Room-2");
    assert_eq!(outcome.selection.unwrap().len(), 2);
}

#[test]
fn test_divide_non_rect_uses_bounding_box() {
    let plan = mixed_plan();
    let outcome = apply(
        &plan,
        Command::DivideArea {
            id: id("e"),
            partitions: 2,
            direction: SplitDirection::Horizontal,
        },
    );
    let pieces: Vec<_> = outcome
        .plan
        .areas
        .iter()
        .filter(|a| a.parent_id == Some(id("e")))
        .collect();
    assert_eq!(pieces.len(), 2);
    let first = pieces[0].shape.as_polygon().unwrap();
    assert_eq!(
        first.points,
        pts(&[(6.0, 6.5), (8.0, 6.5), (8.0, 7.0), (6.0, 7.0)])
    );

    let single = apply(
        &plan,
        Command::DivideArea {
            id: id("r"),
            partitions: 1,
            direction: SplitDirection::Vertical,
        },
    );
    assert_eq!(single.plan, plan);
}

#[test]
fn test_merge_command_keeps_first_target() {
    let mut plan = empty_plan();
    plan.areas.push(rect_area("a", "A", 0.0, 0.0, 1.0, 1.0));
    plan.areas.push(rect_area("b", "B", 1.0, 0.0, 1.0, 1.0));
    let outcome = apply(
        &plan,
        Command::MergeAreas {
            ids: vec![id("a"), id("b")],
        },
    );
    assert_eq!(outcome.plan.areas.len(), 1);
    let merged = &outcome.plan.areas[0];
    assert_eq!(merged.id, id("a"));
    assert_eq!(merged.name, "A");
    assert!(approx(merged.shape.area(), 2.0));
    assert_eq!(outcome.selection, Some(vec![id("a")]));
}

#[test]
fn test_subtract_command_largest_is_subject() {
    let mut plan = empty_plan();
    plan.areas
        .push(rect_area("inner", "Inner", 1.0, 1.0, 2.0, 2.0));
    plan.areas
        .push(rect_area("outer", "Outer", 0.0, 0.0, 4.0, 4.0));
    let outcome = apply(
        &plan,
        Command::SubtractAreas {
            ids: vec![id("inner"), id("outer")],
        },
    );
    assert_eq!(outcome.plan.areas.len(), 1);
    let area = &outcome.plan.areas[0];
    assert_eq!(area.id, id("outer"));
    match &area.shape {
        Shape::Polygon(p) => assert_eq!(p.holes.len(), 1),
        other => panic!("expected polygon, got {:?}", other.kind()),
    }
    assert!(approx(area.shape.area(), 12.0));
}

#[test]
fn test_subtract_tie_prefers_first_target() {
    let mut plan = empty_plan();
    plan.areas.push(rect_area("a", "A", 0.0, 0.0, 2.0, 2.0));
    plan.areas.push(rect_area("b", "B", 1.0, 0.0, 2.0, 2.0));
    let outcome = apply(
        &plan,
        Command::SubtractAreas {
            ids: vec![id("b"), id("a")],
        },
    );
    assert_eq!(outcome.plan.areas.len(), 1);
    assert_eq!(outcome.plan.areas[0].id, id("b"));
    assert!(approx(outcome.plan.areas[0].shape.area(), 2.0));
}

#[test]
fn test_subtract_to_nothing_removes_all_targets() {
    let mut plan = empty_plan();
    plan.areas.push(rect_area("a", "A", 0.0, 0.0, 2.0, 2.0));
    plan.areas.push(rect_area("b", "B", 0.0, 0.0, 2.0, 2.0));
    plan.areas.push(rect_area("c", "C", 5.0, 5.0, 1.0, 1.0));
    let outcome = apply(
        &plan,
        Command::SubtractAreas {
            ids: vec![id("a"), id("b")],
        },
    );
    assert_eq!(outcome.plan.areas.len(), 1);
    assert_eq!(outcome.plan.areas[0].id, id("c"));
    assert_eq!(outcome.selection, Some(vec![]));
}

#[test]
fn test_convert_to_polygon_command() {
    let plan = mixed_plan();
    let outcome = apply(&plan, Command::ConvertToPolygon { ids: vec![id("r")] });
    assert_eq!(
        polygon_of(&outcome.plan, "r").points,
        pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)])
    );

    let outcome = apply(
        &plan,
        Command::ConvertToPolygon {
            ids: vec![id("r"), id("e")],
        },
    );
    assert!(outcome.plan.find_area(&id("e")).is_none());
    assert!(shape_of(&outcome.plan, "r").as_multipolygon().is_some());
}

#[test]
fn test_ellipse_rect_conversions() {
    let plan = mixed_plan();
    let outcome = apply(&plan, Command::EllipseToRect { id: id("e") });
    assert_eq!(rect_of(&outcome.plan, "e"), Rect::new(6.0, 6.5, 2.0, 1.0));
    let back = apply(&outcome.plan, Command::RectToEllipse { id: id("e") });
    assert_eq!(
        ellipse_of(&back.plan, "e"),
        Ellipse::new(7.0, 7.0, 1.0, 0.5)
    );
}

#[test]
fn test_group_commands() {
    let plan = mixed_plan();
    let outcome = apply(
        &plan,
        Command::CreateGroup {
            name: "Wing".into(),
            area_ids: vec![id("r"), id("ghost")],
        },
    );
    assert_eq!(outcome.selection, None);
    let group = outcome.plan.area_groups[0].clone();
    assert_eq!(group.area_ids, vec![id("r"), id("ghost")]);

    let hidden = apply(
        &outcome.plan,
        Command::SetGroupVisibility {
            id: group.id.clone(),
            visible: false,
        },
    );
    assert!(!hidden.plan.area_groups[0].visible);

    let renamed = apply(
        &hidden.plan,
        Command::RenameGroup {
            id: group.id.clone(),
            name: "East wing".into(),
        },
    );
    assert_eq!(renamed.plan.area_groups[0].name, "East wing");

    let locked = apply(
        &renamed.plan,
        Command::SetGroupLocked {
            id: group.id.clone(),
            locked: true,
        },
    );
    assert!(locked.plan.area_groups[0].locked);

    let added = apply(
        &locked.plan,
        Command::AddToGroup {
            id: group.id.clone(),
            area_ids: vec![id("e")],
        },
    );
    let removed = apply(
        &added.plan,
        Command::RemoveFromGroup {
            id: group.id.clone(),
            area_ids: vec![id("ghost")],
        },
    );
    assert_eq!(removed.plan.area_groups[0].area_ids, vec![id("r"), id("e")]);

    let deleted = apply(&removed.plan, Command::DeleteGroup { id: group.id });
    assert!(deleted.plan.area_groups.is_empty());
    assert_eq!(deleted.plan.areas, plan.areas);
}

#[test]
fn test_set_selection_leaves_plan() {
    let plan = mixed_plan();
    let outcome = apply(
        &plan,
        Command::SetSelection {
            ids: vec![id("r"), id("m")],
        },
    );
    assert_eq!(outcome.plan, plan);
    assert_eq!(outcome.selection, Some(vec![id("r"), id("m")]));
}

#[test]
fn test_load_plan_returns_document_unchanged() {
    let plan = mixed_plan();
    let mut other = empty_plan();
    other.meta.name = "Other".into();
    other.meta.updated_at = other.meta.created_at - chrono::Duration::days(3);

    let outcome = apply(
        &plan,
        Command::LoadPlan {
            plan: Box::new(other.clone()),
        },
    );
    assert_eq!(outcome.plan, other);
    assert_eq!(outcome.plan.meta.updated_at, other.meta.updated_at);
    assert_eq!(outcome.selection, Some(vec![]));

    other.version.clear();
    let outcome = apply(
        &plan,
        Command::LoadPlan {
            plan: Box::new(other),
        },
    );
    assert_eq!(outcome.plan, plan);
}

fn any_handle() -> impl Strategy<Value = ResizeHandle> {
    prop_oneof![
        Just(ResizeHandle::N),
        Just(ResizeHandle::S),
        Just(ResizeHandle::E),
        Just(ResizeHandle::W),
        Just(ResizeHandle::Ne),
        Just(ResizeHandle::Nw),
        Just(ResizeHandle::Se),
        Just(ResizeHandle::Sw),
    ]
}

// Rect placed inside a `cw` x `ch` canvas from unit fractions.
fn plan_with_rect(cw: f64, ch: f64, fx: f64, fy: f64, fw: f64, fh: f64) -> Plan {
    let mut plan = Plan::new("Prop", cw, ch, LengthUnit::Meters);
    let (w, h) = (fw * cw, fh * ch);
    plan.areas.push(rect_area("a", "A", fx * (cw - w), fy * (ch - h), w, h));
    plan.areas.push(rect_area("b", "B", 0.0, 0.0, cw / 3.0, ch / 3.0));
    plan
}

proptest! {
    #[test]
    fn prop_snapped_move_keeps_rects_on_canvas(
        cw in 1.0..20.0f64, ch in 1.0..20.0f64,
        fx in 0.0..1.0f64, fy in 0.0..1.0f64,
        fw in 0.1..1.0f64, fh in 0.1..1.0f64,
        dx in -30.0..30.0f64, dy in -30.0..30.0f64,
    ) {
        let plan = plan_with_rect(cw, ch, fx, fy, fw, fh);
        let outcome = apply(&plan, Command::MoveRect { id: id("a"), dx, dy, snap: true });
        let r = rect_of(&outcome.plan, "a");
        prop_assert!(r.x >= -1e-9 && r.y >= -1e-9);
        prop_assert!(r.right() <= cw + 1e-9);
        prop_assert!(r.bottom() <= ch + 1e-9);
    }

    #[test]
    fn prop_snapped_resize_keeps_rects_on_canvas(
        cw in 1.0..20.0f64, ch in 1.0..20.0f64,
        fx in 0.0..1.0f64, fy in 0.0..1.0f64,
        fw in 0.1..1.0f64, fh in 0.1..1.0f64,
        dx in -30.0..30.0f64, dy in -30.0..30.0f64,
        handle in any_handle(),
    ) {
        let plan = plan_with_rect(cw, ch, fx, fy, fw, fh);
        let command = Command::ResizeRect { id: id("a"), handle, dx, dy, snap: true };
        let outcome = apply(&plan, command);
        let r = rect_of(&outcome.plan, "a");
        prop_assert!(r.width > 0.0 && r.height > 0.0);
        prop_assert!(r.x >= -1e-9 && r.y >= -1e-9);
        prop_assert!(r.right() <= cw + 1e-9);
        prop_assert!(r.bottom() <= ch + 1e-9);
    }
}
