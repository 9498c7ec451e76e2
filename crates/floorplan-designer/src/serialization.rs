//! Plan document import and export.
//!
//! The document is the plan tree rendered as pretty-printed JSON. Import
//! only insists on the presence of a version tag; any tag is accepted.

use floorplan_core::constants::PLAN_SCHEMA_VERSION;
use floorplan_core::PlanDocumentError;
use serde_json::Value;

use crate::model::Plan;

/// Renders the plan as a whitespace-formatted JSON document.
pub fn export_plan(plan: &Plan) -> Result<String, PlanDocumentError> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Parses a plan document.
pub fn import_plan(text: &str) -> Result<Plan, PlanDocumentError> {
    let value: Value = serde_json::from_str(text)?;
    let Some(object) = value.as_object() else {
        return Err(PlanDocumentError::InvalidDocument {
            reason: "expected a JSON object".to_string(),
        });
    };

    let version = match object.get("version") {
        Some(Value::String(v)) if !v.trim().is_empty() => v.clone(),
        _ => {
            tracing::warn!("Rejecting plan document without a version tag");
            return Err(PlanDocumentError::MissingVersion);
        }
    };
    if version != PLAN_SCHEMA_VERSION {
        tracing::warn!(
            "Plan document version '{}' differs from '{}', loading anyway",
            version,
            PLAN_SCHEMA_VERSION
        );
    }

    Ok(serde_json::from_value(value)?)
}
