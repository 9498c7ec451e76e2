//! Area groups
//!
//! Groups only hold area ids. Editing a group never touches areas, and
//! deleting an area never touches groups.

use crate::model::{AreaGroup, AreaId, GroupId, Plan};

/// Appends a group and returns its id.
pub fn create_group(plan: &mut Plan, name: &str, area_ids: &[AreaId]) -> GroupId {
    let mut members: Vec<AreaId> = Vec::with_capacity(area_ids.len());
    for id in area_ids {
        if !members.contains(id) {
            members.push(id.clone());
        }
    }
    let group = AreaGroup::new(name, members);
    let id = group.id.clone();
    plan.area_groups.push(group);
    id
}

/// Returns `false` when no such group exists.
pub fn delete_group(plan: &mut Plan, id: &GroupId) -> bool {
    let before = plan.area_groups.len();
    plan.area_groups.retain(|g| &g.id != id);
    plan.area_groups.len() != before
}

pub fn set_visibility(plan: &mut Plan, id: &GroupId, visible: bool) -> bool {
    match plan.find_group_mut(id) {
        Some(group) => {
            group.visible = visible;
            true
        }
        None => false,
    }
}

pub fn set_locked(plan: &mut Plan, id: &GroupId, locked: bool) -> bool {
    match plan.find_group_mut(id) {
        Some(group) => {
            group.locked = locked;
            true
        }
        None => false,
    }
}

pub fn rename_group(plan: &mut Plan, id: &GroupId, name: &str) -> bool {
    match plan.find_group_mut(id) {
        Some(group) => {
            group.name = name.to_string();
            true
        }
        None => false,
    }
}

/// Adds ids not already in the group.
pub fn add_to_group(plan: &mut Plan, id: &GroupId, area_ids: &[AreaId]) -> bool {
    let Some(group) = plan.find_group_mut(id) else {
        return false;
    };
    for area_id in area_ids {
        if !group.area_ids.contains(area_id) {
            group.area_ids.push(area_id.clone());
        }
    }
    true
}

pub fn remove_from_group(plan: &mut Plan, id: &GroupId, area_ids: &[AreaId]) -> bool {
    let Some(group) = plan.find_group_mut(id) else {
        return false;
    };
    group.area_ids.retain(|a| !area_ids.contains(a));
    true
}

/// Groups that list `area_id`.
pub fn groups_containing<'a>(plan: &'a Plan, area_id: &AreaId) -> Vec<&'a AreaGroup> {
    plan.area_groups
        .iter()
        .filter(|g| g.contains(area_id))
        .collect()
}

/// `true` when any group listing the area is hidden.
pub fn is_hidden(plan: &Plan, area_id: &AreaId) -> bool {
    groups_containing(plan, area_id).iter().any(|g| !g.visible)
}

/// `true` when any group listing the area is locked.
pub fn is_locked(plan: &Plan, area_id: &AreaId) -> bool {
    groups_containing(plan, area_id).iter().any(|g| g.locked)
}
