use chrono::{DateTime, Utc};
use floorplan_core::constants::PLAN_SCHEMA_VERSION;
use floorplan_core::LengthUnit;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{Area, AreaId, Point};
use crate::geometry::Size;

/// Drawable region plus the current viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
    pub pan: Point,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            zoom: 1.0,
            pan: Point::new(0.0, 0.0),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMeta {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlanMeta {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named collection of area references. Members are plain ids and may
/// outlive the areas they name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaGroup {
    pub id: GroupId,
    pub name: String,
    pub area_ids: Vec<AreaId>,
    pub visible: bool,
    pub locked: bool,
}

impl AreaGroup {
    pub fn new(name: impl Into<String>, area_ids: Vec<AreaId>) -> Self {
        Self {
            id: GroupId::generate(),
            name: name.into(),
            area_ids,
            visible: true,
            locked: false,
        }
    }

    pub fn contains(&self, id: &AreaId) -> bool {
        self.area_ids.contains(id)
    }

    /// Members that still exist in `plan`, in group order.
    pub fn resolve<'a>(&self, plan: &'a Plan) -> Vec<&'a Area> {
        self.area_ids
            .iter()
            .filter_map(|id| plan.find_area(id))
            .collect()
    }
}

/// Root document of the editor. Commands never edit a plan in place; they
/// produce a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub version: String,
    pub units: LengthUnit,
    pub canvas: Canvas,
    pub areas: Vec<Area>,
    #[serde(default)]
    pub area_groups: Vec<AreaGroup>,
    pub meta: PlanMeta,
}

impl Plan {
    /// Empty plan tagged with the current schema version.
    pub fn new(name: impl Into<String>, width: f64, height: f64, units: LengthUnit) -> Self {
        Self {
            version: PLAN_SCHEMA_VERSION.to_string(),
            units,
            canvas: Canvas::new(width, height),
            areas: Vec::new(),
            area_groups: Vec::new(),
            meta: PlanMeta::new(name),
        }
    }

    pub fn size(&self) -> Size {
        self.canvas.size()
    }

    pub fn find_area(&self, id: &AreaId) -> Option<&Area> {
        self.areas.iter().find(|a| &a.id == id)
    }

    pub fn find_area_mut(&mut self, id: &AreaId) -> Option<&mut Area> {
        self.areas.iter_mut().find(|a| &a.id == id)
    }

    pub fn area_index(&self, id: &AreaId) -> Option<usize> {
        self.areas.iter().position(|a| &a.id == id)
    }

    pub fn contains_area(&self, id: &AreaId) -> bool {
        self.area_index(id).is_some()
    }

    /// Removes and returns the area, if present.
    pub fn remove_area(&mut self, id: &AreaId) -> Option<Area> {
        let index = self.area_index(id)?;
        Some(self.areas.remove(index))
    }

    pub fn find_group(&self, id: &GroupId) -> Option<&AreaGroup> {
        self.area_groups.iter().find(|g| &g.id == id)
    }

    pub fn find_group_mut(&mut self, id: &GroupId) -> Option<&mut AreaGroup> {
        self.area_groups.iter_mut().find(|g| &g.id == id)
    }

    /// Equality that ignores `meta.updated_at`.
    pub fn same_content(&self, other: &Plan) -> bool {
        self.version == other.version
            && self.units == other.units
            && self.canvas == other.canvas
            && self.areas == other.areas
            && self.area_groups == other.area_groups
            && self.meta.name == other.meta.name
            && self.meta.created_at == other.meta.created_at
    }
}
