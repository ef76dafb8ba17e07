//! Editor state: table data, snapshot history, selection and clipboard
//!
//! Everything here is purely local; remote synchronization is driven from
//! `update::remote` through `Cmd`s.

use thiserror::Error;

use super::history::History;
use super::row::{Row, Table};
use super::schema::{CellValue, Column};

/// Reference to one cell, with the value it held when captured
///
/// The row index is not re-validated after refetches or deletions; a stale
/// reference simply points at whatever row now has that index.
#[derive(Debug, Clone, PartialEq)]
pub struct CellRef {
    pub row: usize,
    pub column: Column,
    pub value: CellValue,
}

impl CellRef {
    pub fn new(row: usize, column: Column, value: CellValue) -> Self {
        Self { row, column, value }
    }
}

/// Errors from local table edits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("row {index} is out of range (table has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
}

/// The editor's data store and history engine
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Current rows in display order
    pub table: Table,
    /// Rows as of the last successful fetch or save
    pub original_table: Table,
    /// Undo/redo snapshots
    pub history: History,
    /// Cell captured by the last copy
    pub clipboard: Option<CellRef>,
    /// Last focused cell
    pub selection: Option<CellRef>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor pre-populated with rows (as if just fetched)
    pub fn with_rows(rows: Table) -> Self {
        let mut editor = Self::new();
        editor.load(rows);
        editor
    }

    /// Replace the table with freshly fetched rows
    ///
    /// History, selection and clipboard are left as they are.
    pub fn load(&mut self, rows: Table) {
        self.original_table = rows.clone();
        self.table = rows;
    }

    /// Record that the current table has been persisted
    pub fn mark_saved(&mut self) {
        self.original_table = self.table.clone();
    }

    pub fn row_count(&self) -> usize {
        self.table.len()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.table.get(index)
    }

    pub fn cell(&self, row: usize, column: Column) -> Option<&CellValue> {
        self.table.get(row).map(|r| r.get(column))
    }

    /// Write one cell from user input
    ///
    /// Pushes the pre-edit table onto the undo stack and clears redo. Blank
    /// input (after trimming) is stored as null; anything else is stored as
    /// typed.
    pub fn edit_cell(&mut self, row: usize, column: Column, raw: &str) -> Result<(), EditError> {
        let len = self.table.len();
        if row >= len {
            return Err(EditError::RowOutOfRange { index: row, len });
        }

        let before = self.table.clone();
        self.table[row].set(column, CellValue::from_input(raw));
        self.history.push(before);
        Ok(())
    }

    /// Restore the previous snapshot. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let current = std::mem::take(&mut self.table);
        match self.history.undo(current) {
            Some(previous) => {
                self.table = previous;
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone snapshot. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let current = std::mem::take(&mut self.table);
        match self.history.redo(current) {
            Some(next) => {
                self.table = next;
                true
            }
            None => false,
        }
    }

    /// Record the focused cell
    pub fn select(&mut self, row: usize, column: Column, value: CellValue) {
        self.selection = Some(CellRef::new(row, column, value));
    }

    /// Copy the selection into the clipboard. Returns false without a selection.
    pub fn copy(&mut self) -> bool {
        match &self.selection {
            Some(selection) => {
                self.clipboard = Some(selection.clone());
                true
            }
            None => false,
        }
    }

    /// Paste the clipboard value into the currently selected cell
    ///
    /// The target is the live selection, not the cell the value was copied
    /// from. Returns `Ok(false)` when either clipboard or selection is empty.
    pub fn paste(&mut self) -> Result<bool, EditError> {
        let (Some(clipboard), Some(selection)) = (&self.clipboard, &self.selection) else {
            return Ok(false);
        };
        let value = clipboard.value.display_text();
        let (row, column) = (selection.row, selection.column);
        self.edit_cell(row, column, &value)?;
        Ok(true)
    }

    /// Clear the selected cell. Returns `Ok(false)` without a selection.
    pub fn delete_selection(&mut self) -> Result<bool, EditError> {
        let Some(selection) = &self.selection else {
            return Ok(false);
        };
        let (row, column) = (selection.row, selection.column);
        self.edit_cell(row, column, "")?;
        Ok(true)
    }
}
