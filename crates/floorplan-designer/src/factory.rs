//! Plan factory: blank and sample plans.

use floorplan_settings::PlanDefaults;

use crate::model::{Area, AreaStyle, Plan, Rect, Shape};

/// Area style taken from the configured defaults.
pub fn default_style(defaults: &PlanDefaults) -> AreaStyle {
    AreaStyle {
        fill: defaults.fill.clone(),
        stroke: defaults.stroke.clone(),
        stroke_width: defaults.stroke_width,
    }
}

pub fn blank_plan(defaults: &PlanDefaults) -> Plan {
    tracing::info!(
        "Creating blank plan '{}' ({} x {} {})",
        defaults.plan_name,
        defaults.canvas_width,
        defaults.canvas_height,
        defaults.units
    );
    Plan::new(
        defaults.plan_name.clone(),
        defaults.canvas_width,
        defaults.canvas_height,
        defaults.units,
    )
}

/// Blank plan with a living room, kitchen and bedroom laid out to fill the
/// canvas.
pub fn seeded_plan(defaults: &PlanDefaults) -> Plan {
    let mut plan = blank_plan(defaults);
    let (w, h) = (plan.canvas.width, plan.canvas.height);
    let base = default_style(defaults);

    // x, y, width, height as fractions of the canvas
    let rooms = [
        ("Living room", [0.0, 0.0, 0.5, 0.6], "#dbeafe"),
        ("Kitchen", [0.5, 0.0, 0.5, 0.6], "#fef3c7"),
        ("Bedroom", [0.0, 0.6, 1.0, 0.4], "#dcfce7"),
    ];
    for (name, [fx, fy, fw, fh], fill) in rooms {
        let rect = Rect::new(w * fx, h * fy, w * fw, h * fh);
        let style = AreaStyle {
            fill: fill.to_string(),
            ..base.clone()
        };
        plan.areas.push(Area::new(name, Shape::Rect(rect), &style));
    }
    plan
}
