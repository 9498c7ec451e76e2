//! Rendering boundary
//!
//! The rendering collaborator draws whatever this module resolves: per area,
//! either the committed shape or a draft shape supplied during an
//! interaction, plus selection and visibility flags. No screen coordinates
//! are computed here.

use lyon::path::Path;
use std::collections::HashMap;

use crate::groups;
use crate::model::{Area, AreaId, Plan, PlanShape, Shape};

/// One area as the renderer should draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArea<'a> {
    pub area: &'a Area,
    /// Draft shape if one was supplied, otherwise the committed shape.
    pub shape: &'a Shape,
    pub is_draft: bool,
    pub selected: bool,
    /// Some group listing this area is hidden.
    pub hidden: bool,
    /// Some group listing this area is locked.
    pub locked: bool,
}

pub fn resolve_areas<'a>(
    plan: &'a Plan,
    selection: &[AreaId],
    drafts: &'a HashMap<AreaId, Shape>,
) -> Vec<ResolvedArea<'a>> {
    plan.areas
        .iter()
        .map(|area| {
            let draft = drafts.get(&area.id);
            ResolvedArea {
                area,
                shape: draft.unwrap_or(&area.shape),
                is_draft: draft.is_some(),
                selected: selection.contains(&area.id),
                hidden: groups::is_hidden(plan, &area.id),
                locked: groups::is_locked(plan, &area.id),
            }
        })
        .collect()
}

/// Outline of a shape as a lyon path, in plan coordinates.
pub fn shape_path(shape: &Shape) -> Path {
    shape.render()
}
