//! Snapshot-based undo/redo.
//!
//! Every effective command leaves a record holding the plan before and after
//! it ran. Undo and redo restore those snapshots directly and never re-run
//! commands.

use chrono::{DateTime, Utc};
use floorplan_core::constants::HISTORY_LIMIT;

use crate::commands::Command;
use crate::interpreter::{CommandOutcome, Interpreter};
use crate::model::Plan;

/// One effective command application.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRecord {
    /// Wire tag of the command
    pub kind: String,
    pub command: Command,
    pub description: String,
    pub before: Plan,
    pub after: Plan,
    pub timestamp: DateTime<Utc>,
}

/// Bounded undo stack plus redo stack.
///
/// The most recent entry of each stack is its last element.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<CommandRecord>,
    redo_stack: Vec<CommandRecord>,
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history with the default depth (100)
    pub fn new() -> Self {
        Self::with_depth(HISTORY_LIMIT)
    }

    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Runs `command` through the interpreter and records it when the plan
    /// changed. Suppressed commands still pass their selection through.
    pub fn apply(
        &mut self,
        interpreter: &Interpreter,
        plan: &Plan,
        command: &Command,
    ) -> CommandOutcome {
        let outcome = interpreter.apply(plan, command);
        if outcome.plan == *plan {
            return outcome;
        }
        self.record(CommandRecord {
            kind: command.kind().to_string(),
            command: command.clone(),
            description: outcome
                .description
                .clone()
                .unwrap_or_else(|| command.name().to_string()),
            before: plan.clone(),
            after: outcome.plan.clone(),
            timestamp: Utc::now(),
        });
        outcome
    }

    /// Push a record, evicting the oldest once the depth is exceeded.
    pub fn record(&mut self, record: CommandRecord) {
        self.redo_stack.clear();
        self.undo_stack.push(record);
        if self.undo_stack.len() > self.max_depth {
            let evicted = self.undo_stack.remove(0);
            tracing::debug!("History full, dropped '{}'", evicted.description);
        }
    }

    /// Moves the newest record to the redo stack and returns the plan it
    /// started from.
    pub fn undo(&mut self) -> Option<Plan> {
        let record = self.undo_stack.pop()?;
        let before = record.before.clone();
        self.redo_stack.push(record);
        Some(before)
    }

    /// Moves the most recently undone record back and returns the plan it
    /// produced.
    pub fn redo(&mut self) -> Option<Plan> {
        let record = self.redo_stack.pop()?;
        let after = record.after.clone();
        self.undo_stack.push(record);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
        Some(after)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|r| r.description.as_str())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|r| r.description.as_str())
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Records oldest first.
    pub fn undo_records(&self) -> &[CommandRecord] {
        &self.undo_stack
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
