//! Length units for plan coordinates
//!
//! Plans store raw floating point coordinates; the unit only decides how
//! those numbers are labelled and converted for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit in which every coordinate of a plan is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Millimeters
    #[serde(rename = "mm")]
    Millimeters,
    /// Centimeters
    #[serde(rename = "cm")]
    Centimeters,
    /// Meters
    #[serde(rename = "m")]
    Meters,
    /// Inches
    #[serde(rename = "in")]
    Inches,
    /// Feet
    #[serde(rename = "ft")]
    Feet,
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Meters
    }
}

impl LengthUnit {
    /// Short label used next to numbers ("m", "ft", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Meters => "m",
            Self::Inches => "in",
            Self::Feet => "ft",
        }
    }

    /// How many meters one unit represents
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            Self::Millimeters => 0.001,
            Self::Centimeters => 0.01,
            Self::Meters => 1.0,
            Self::Inches => 0.0254,
            Self::Feet => 0.3048,
        }
    }

    /// Convert a length expressed in `self` into `target` units
    pub fn convert(&self, value: f64, target: LengthUnit) -> f64 {
        value * self.meters_per_unit() / target.meters_per_unit()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeters),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeters),
            "m" | "meter" | "meters" => Ok(Self::Meters),
            "in" | "inch" | "inches" => Ok(Self::Inches),
            "ft" | "foot" | "feet" => Ok(Self::Feet),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Format a length for display, e.g. `3.250 m`
pub fn format_length(value: f64, unit: LengthUnit) -> String {
    format!("{:.3} {}", value, unit.label())
}

/// Format an area for display, e.g. `12.00 m²`
pub fn format_area(value: f64, unit: LengthUnit) -> String {
    format!("{:.2} {}²", value, unit.label())
}
