//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{CellValue, Column, Row, RowId, Table};

/// Direction for focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Data store messages (edits, undo/redo)
#[derive(Debug, Clone, PartialEq)]
pub enum TableMsg {
    /// Write one cell from user input (blank input clears the cell)
    EditCell {
        row: usize,
        column: Column,
        value: String,
    },
    /// Restore the previous snapshot
    Undo,
    /// Re-apply the last undone snapshot
    Redo,
}

/// Selection and clipboard messages
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardMsg {
    /// A cell gained focus
    Select {
        row: usize,
        column: Column,
        value: CellValue,
    },
    /// Copy the selected cell (Ctrl+C)
    Copy,
    /// Paste into the selected cell (Ctrl+V)
    Paste,
    /// Clear the selected cell (Delete)
    DeleteSelection,
}

/// Grid focus and in-place editing messages
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    // === Focus Movement ===
    /// Arrow keys (commit a pending edit first for Up/Down)
    Move(Direction),
    /// Tab
    NextCell,
    /// Shift+Tab
    PrevCell,
    /// Home
    RowStart,
    /// End
    RowEnd,
    /// Ctrl+Home
    FirstCell,
    /// Ctrl+End
    LastCell,
    PageUp,
    PageDown,
    /// Focus a specific cell
    FocusCell { row: usize, col: usize },

    // === Editing ===
    /// Enter: start editing, or commit and move down while editing
    Enter,
    /// Printable character: start editing with it, or insert it
    TypeChar(char),
    /// Backspace inside the edit buffer
    Backspace,
    /// Escape: discard the edit buffer
    CancelEdit,
    /// Commit the edit buffer without moving
    CommitEdit,
}

/// Remote store messages: requests and their completions
///
/// Completions carry `Result<_, String>` so messages stay `Clone`.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteMsg {
    /// Reload every row
    FetchAll,
    Fetched(Result<Table, String>),
    /// PUT the whole table (Ctrl+S)
    SaveAll,
    Saved(Result<(), String>),
    /// POST a blank row (Ctrl+N)
    CreateRow,
    RowCreated(Result<(), String>),
    /// PUT one row by identifier
    UpdateRow { id: Option<RowId>, row: Row },
    /// Update the row under the grid focus (Ctrl+U)
    UpdateFocusedRow,
    RowUpdated(Result<(), String>),
    /// DELETE one row by identifier
    DeleteRow { id: Option<RowId> },
    /// Delete the row under the grid focus (Ctrl+D)
    DeleteFocusedRow,
    RowDeleted(Result<(), String>),
}

/// UI messages (status banner)
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// Clear the status message if its time is up
    Tick,
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Terminal resized (columns, rows)
    Resize(u16, u16),
    Quit,
}

/// Top-level message
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Table(TableMsg),
    Clipboard(ClipboardMsg),
    Grid(GridMsg),
    Remote(RemoteMsg),
    Ui(UiMsg),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn edit_cell(row: usize, column: Column, value: impl Into<String>) -> Self {
        Msg::Table(TableMsg::EditCell {
            row,
            column,
            value: value.into(),
        })
    }

    pub fn select(row: usize, column: Column, value: CellValue) -> Self {
        Msg::Clipboard(ClipboardMsg::Select { row, column, value })
    }

    pub fn move_focus(direction: Direction) -> Self {
        Msg::Grid(GridMsg::Move(direction))
    }

    pub fn resize(width: u16, height: u16) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}
