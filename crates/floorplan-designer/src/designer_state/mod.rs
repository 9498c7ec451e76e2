//! Designer state manager for UI integration.
//!
//! Owns the live plan, the selection and the history. All changes go
//! through [`DesignerState::apply`], [`DesignerState::undo`],
//! [`DesignerState::redo`] or [`DesignerState::load`].
//!
//! This module is split into submodules:
//! - `history`: Undo/redo functionality
//! - `io`: Plan document import/export

mod history;
mod io;

use floorplan_settings::Config;

use crate::commands::Command;
use crate::factory::blank_plan;
use crate::history::History;
use crate::interpreter::{CommandOutcome, Interpreter};
use crate::model::{AreaId, Plan};

/// Designer state for UI integration
pub struct DesignerState {
    plan: Plan,
    selection: Vec<AreaId>,
    history: History,
    interpreter: Interpreter,
    pub is_modified: bool,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerState {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            plan: blank_plan(&config.defaults),
            selection: Vec::new(),
            history: History::with_depth(config.editor.history_limit),
            interpreter: Interpreter::from_settings(&config.editor, &config.defaults),
            is_modified: false,
        }
    }

    /// State around an existing plan, with empty history.
    pub fn with_plan(plan: Plan) -> Self {
        let mut state = Self::new();
        state.plan = plan;
        state
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn selection(&self) -> &[AreaId] {
        &self.selection
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Applies a command. Loading a plan goes through [`Self::load`] and
    /// is never recorded.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        if let Command::LoadPlan { plan } = &command {
            if plan.version.trim().is_empty() {
                return CommandOutcome {
                    plan: self.plan.clone(),
                    selection: None,
                    description: None,
                };
            }
            self.load((**plan).clone());
            return CommandOutcome {
                plan: self.plan.clone(),
                selection: Some(Vec::new()),
                description: Some(command.name().to_string()),
            };
        }

        let outcome = self.history.apply(&self.interpreter, &self.plan, &command);
        if outcome.plan != self.plan {
            self.plan = outcome.plan.clone();
            self.is_modified = true;
        }
        if let Some(selection) = &outcome.selection {
            self.selection = selection.clone();
        }
        outcome
    }

    /// Replaces the plan wholesale and forgets all history.
    pub fn load(&mut self, plan: Plan) {
        tracing::info!(
            "Loading plan '{}' ({} areas)",
            plan.meta.name,
            plan.areas.len()
        );
        self.plan = plan;
        self.selection.clear();
        self.history.clear();
        self.is_modified = false;
    }
}
