use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Shape;

/// Stable identifier of an area. Fixed for the area's lifetime and never
/// reused by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(String);

impl AreaId {
    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AreaId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AreaId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Paint applied to an area's outline and interior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for AreaStyle {
    fn default() -> Self {
        Self {
            fill: "#dbeafe".to_string(),
            stroke: "#1e3a8a".to_string(),
            stroke_width: 0.05,
        }
    }
}

/// A named, coloured region of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub shape: Shape,
    /// Area this one was partitioned from. May point at an area that no
    /// longer exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<AreaId>,
}

impl Area {
    /// New area with a generated id.
    pub fn new(name: impl Into<String>, shape: Shape, style: &AreaStyle) -> Self {
        Self::with_id(AreaId::generate(), name, shape, style)
    }

    pub fn with_id(id: AreaId, name: impl Into<String>, shape: Shape, style: &AreaStyle) -> Self {
        Self {
            id,
            name: name.into(),
            fill: style.fill.clone(),
            stroke: style.stroke.clone(),
            stroke_width: style.stroke_width,
            shape,
            parent_id: None,
        }
    }

    pub fn style(&self) -> AreaStyle {
        AreaStyle {
            fill: self.fill.clone(),
            stroke: self.stroke.clone(),
            stroke_width: self.stroke_width,
        }
    }

    pub fn set_style(&mut self, style: &AreaStyle) {
        self.fill = style.fill.clone();
        self.stroke = style.stroke.clone();
        self.stroke_width = style.stroke_width;
    }
}
