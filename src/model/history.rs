//! Snapshot history (undo/redo) for the table editor.

use super::row::Snapshot;

/// Two-stack undo/redo history over whole-table snapshots.
///
/// Pushing a new snapshot discards everything on the redo stack; only undo
/// and redo move snapshots between the stacks.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the table as it was before an edit (clears redo stack)
    pub fn push(&mut self, before_edit: Snapshot) {
        self.redo_stack.clear();
        self.undo_stack.push(before_edit);
    }

    /// Pop the most recent undo snapshot, parking `current` on the redo stack
    ///
    /// Returns `None` (and keeps `current` out of the stacks) when there is
    /// nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Pop the most recent redo snapshot, parking `current` on the undo stack
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots available to undo
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots available to redo
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}
