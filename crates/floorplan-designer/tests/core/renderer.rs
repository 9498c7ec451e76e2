use std::collections::HashMap;

use floorplan_designer::{
    resolve_areas, shape_path, AreaId, Command, Interpreter, Rect, Shape,
};

use crate::support::mixed_plan;

#[test]
fn test_resolve_plain_plan() {
    let plan = mixed_plan();
    let drafts = HashMap::new();
    let resolved = resolve_areas(&plan, &[AreaId::from("e")], &drafts);
    assert_eq!(resolved.len(), 4);
    for item in &resolved {
        assert!(!item.is_draft);
        assert!(!item.hidden);
        assert!(!item.locked);
        assert_eq!(item.shape, &item.area.shape);
        assert_eq!(item.selected, item.area.id == AreaId::from("e"));
    }
}

#[test]
fn test_draft_shape_overrides_committed() {
    let plan = mixed_plan();
    let mut drafts = HashMap::new();
    let draft = Shape::Rect(Rect::new(1.0, 1.0, 3.0, 1.0));
    drafts.insert(AreaId::from("r"), draft.clone());
    let resolved = resolve_areas(&plan, &[], &drafts);
    let hall = resolved.iter().find(|r| r.area.id == AreaId::from("r")).unwrap();
    assert!(hall.is_draft);
    assert_eq!(hall.shape, &draft);
    assert_ne!(hall.shape, &hall.area.shape);
}

#[test]
fn test_hidden_and_locked_groups() {
    let interpreter = Interpreter::new();
    let plan = interpreter
        .apply(
            &mixed_plan(),
            &Command::CreateGroup {
                name: "Wet".into(),
                area_ids: vec![AreaId::from("e")],
            },
        )
        .plan;
    let group = plan.area_groups[0].id.clone();
    let plan = interpreter
        .apply(
            &plan,
            &Command::SetGroupVisibility {
                id: group.clone(),
                visible: false,
            },
        )
        .plan;
    let plan = interpreter
        .apply(
            &plan,
            &Command::SetGroupLocked {
                id: group,
                locked: true,
            },
        )
        .plan;

    let drafts = HashMap::new();
    let resolved = resolve_areas(&plan, &[], &drafts);
    for item in resolved {
        let grouped = item.area.id == AreaId::from("e");
        assert_eq!(item.hidden, grouped);
        assert_eq!(item.locked, grouped);
    }
}

#[test]
fn test_shape_paths_not_empty() {
    for area in &mixed_plan().areas {
        let path = shape_path(&area.shape);
        assert!(path.iter().count() > 0, "{} has an empty path", area.name);
    }
}
