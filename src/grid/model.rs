//! Grid interaction state: focused cell, in-place edit buffer, column widths

use crate::model::{Column, Table, COLUMN_COUNT};

use super::viewport::GridViewport;

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Schema column at this position
    pub fn column(&self) -> Column {
        Column::from_index(self.col).unwrap_or(Column::DischargePort)
    }
}

/// State for editing a single cell in place
#[derive(Debug, Clone)]
pub struct CellEditState {
    /// Position of the cell being edited
    pub position: CellPosition,
    /// Text typed so far
    buffer: String,
    /// Cursor position in characters
    cursor: usize,
    /// Value shown before editing started
    pub original: String,
}

impl CellEditState {
    /// Start editing with the current cell text, cursor at end
    pub fn new(position: CellPosition, value: String) -> Self {
        let cursor = value.chars().count();
        Self {
            position,
            buffer: value.clone(),
            cursor,
            original: value,
        }
    }

    /// Start editing with a typed character (replaces content)
    pub fn with_char(position: CellPosition, original: String, ch: char) -> Self {
        Self {
            position,
            buffer: ch.to_string(),
            cursor: 1,
            original,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters (for rendering)
    pub fn cursor_char_position(&self) -> usize {
        self.cursor
    }

    pub fn is_modified(&self) -> bool {
        self.buffer != self.original
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert text at cursor; line breaks are dropped
    pub fn insert_text(&mut self, text: &str) {
        for ch in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(ch);
        }
    }

    /// Backspace
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.buffer.remove(at);
    }

    /// Delete
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.buffer.remove(at);
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }
}

/// A confirmed in-place edit, ready to be written through `edit_cell`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    pub position: CellPosition,
    pub new_value: String,
}

/// Focus, scroll and edit state of the grid view
#[derive(Debug, Clone, Default)]
pub struct GridState {
    /// Currently focused cell
    pub focused: CellPosition,
    /// Visible region
    pub viewport: GridViewport,
    /// Cell editing state (Some while editing)
    pub editing: Option<CellEditState>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the focus inside a table of `row_count` rows
    pub fn clamp_focus(&mut self, row_count: usize) {
        self.focused.row = self.focused.row.min(row_count.saturating_sub(1));
        self.focused.col = self.focused.col.min(COLUMN_COUNT - 1);
    }

    /// Focus a specific cell and ensure it's visible
    pub fn focus_cell(&mut self, row: usize, col: usize, row_count: usize) {
        self.focused = CellPosition::new(row, col);
        self.clamp_focus(row_count);
        self.ensure_focus_visible(row_count);
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Start editing the focused cell with its current text
    pub fn start_editing(&mut self, current: String) {
        self.editing = Some(CellEditState::new(self.focused, current));
    }

    /// Start editing the focused cell, replacing its text with `ch`
    pub fn start_editing_with_char(&mut self, current: String, ch: char) {
        self.editing = Some(CellEditState::with_char(self.focused, current, ch));
    }

    /// Finish editing and hand back the typed value
    ///
    /// Unlike a pure viewer, an unmodified buffer is still returned: leaving a
    /// cell always writes it back through the store.
    pub fn confirm_edit(&mut self) -> Option<CellEdit> {
        let edit = self.editing.take()?;
        Some(CellEdit {
            position: edit.position,
            new_value: edit.buffer,
        })
    }

    /// Discard the edit buffer
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn edit_insert_char(&mut self, ch: char) {
        if let Some(edit) = &mut self.editing {
            edit.insert_char(ch);
        }
    }

    pub fn edit_delete_backward(&mut self) {
        if let Some(edit) = &mut self.editing {
            edit.delete_backward();
        }
    }

    pub fn edit_delete_forward(&mut self) {
        if let Some(edit) = &mut self.editing {
            edit.delete_forward();
        }
    }

    pub fn edit_cursor_left(&mut self) {
        if let Some(edit) = &mut self.editing {
            edit.cursor_left();
        }
    }

    pub fn edit_cursor_right(&mut self) {
        if let Some(edit) = &mut self.editing {
            edit.cursor_right();
        }
    }

    pub fn edit_cursor_home(&mut self) {
        if let Some(edit) = &mut self.editing {
            edit.cursor_home();
        }
    }

    pub fn edit_cursor_end(&mut self) {
        if let Some(edit) = &mut self.editing {
            edit.cursor_end();
        }
    }
}

/// Column widths (in characters) fitted to header and content
pub fn column_widths(table: &Table) -> [usize; COLUMN_COUNT] {
    const MIN_WIDTH: usize = 4;
    const MAX_WIDTH: usize = 24;

    let mut widths = [MIN_WIDTH; COLUMN_COUNT];
    for col in Column::ALL {
        widths[col.index()] = widths[col.index()].max(col.name().len()).min(MAX_WIDTH);
    }

    for row in table.iter().take(200) {
        for (col, value) in row.cells() {
            let w = value.display_text().chars().count();
            widths[col.index()] = widths[col.index()].max(w).min(MAX_WIDTH);
        }
    }

    widths
}
