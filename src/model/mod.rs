//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod editor;
pub mod history;
pub mod row;
pub mod schema;
pub mod status_bar;
pub mod ui;

pub use editor::{CellRef, EditError, EditorState};
pub use history::History;
pub use row::{Row, Snapshot, Table, ID_FIELD};
pub use schema::{CellValue, Column, RowId, COLUMN_COUNT};
pub use status_bar::{
    sync_status_bar, RenderedSegment, SegmentContent, SegmentId, SegmentPosition, StatusBar,
    StatusBarLayout, StatusSegment, TransientMessage,
};
pub use ui::{UiState, DEFAULT_STATUS_DURATION};

use crate::config::EditorConfig;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Table data, history, selection and clipboard
    pub editor: EditorState,
    /// UI state (status bar, grid focus, request flags)
    pub ui: UiState,
    /// Effective configuration (file + CLI overrides)
    pub config: EditorConfig,
}

impl AppModel {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            editor: EditorState::new(),
            ui: UiState::with_status_duration(config.status_duration()),
            config,
        }
    }

    /// Model pre-populated with rows
    pub fn with_rows(config: EditorConfig, rows: Table) -> Self {
        let mut model = Self::new(config);
        model.editor.load(rows);
        model
    }

    /// Current value of the focused cell, if the table has that row
    pub fn focused_value(&self) -> Option<&CellValue> {
        let pos = self.ui.grid.focused;
        self.editor.cell(pos.row, pos.column())
    }

    /// Update grid viewport after a terminal resize
    ///
    /// `height` and `width` are the cell-area dimensions in terminal cells.
    pub fn resize(&mut self, width: u16, height: u16) {
        let visible_rows = height as usize;
        let widths = crate::grid::column_widths(&self.editor.table);
        let avg = widths.iter().sum::<usize>() / COLUMN_COUNT + 1;
        let visible_cols = (width as usize / avg.max(1)).max(1);
        let rows = self.editor.row_count();
        self.ui.grid.set_viewport_size(visible_rows, visible_cols, rows);
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
