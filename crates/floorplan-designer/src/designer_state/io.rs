//! Plan document import/export for designer state.

use floorplan_core::PlanDocumentError;

use super::DesignerState;
use crate::serialization::{export_plan, import_plan};

impl DesignerState {
    /// Loads a plan document. On failure the current plan and history are
    /// left untouched.
    pub fn import_json(&mut self, text: &str) -> Result<(), PlanDocumentError> {
        let plan = import_plan(text)?;
        self.load(plan);
        Ok(())
    }

    pub fn export_json(&self) -> Result<String, PlanDocumentError> {
        export_plan(&self.plan)
    }

    /// Marks the current plan as saved.
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }
}
