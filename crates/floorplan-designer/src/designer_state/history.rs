//! Undo/redo for designer state.

use super::DesignerState;

impl DesignerState {
    /// Restores the plan from before the last recorded command. Returns
    /// `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(plan) => {
                self.plan = plan;
                self.selection.clear();
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    /// Re-applies the last undone command's result.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(plan) => {
                self.plan = plan;
                self.selection.clear();
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Menu label for the next undo, e.g. "Undo Move Kitchen".
    pub fn undo_label(&self) -> Option<String> {
        self.history
            .undo_description()
            .map(|d| format!("Undo {}", d))
    }

    pub fn redo_label(&self) -> Option<String> {
        self.history
            .redo_description()
            .map(|d| format!("Redo {}", d))
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
