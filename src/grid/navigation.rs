//! Cell navigation for the cost grid
//!
//! Arrow keys, Tab/Shift+Tab, Home/End, paging and viewport scrolling. The
//! grid does not own the rows, so every move takes the current row count.

use crate::model::COLUMN_COUNT;

use super::model::{CellPosition, GridState};

impl GridState {
    /// Move focus by delta (clamped to the table)
    pub fn move_focus(&mut self, delta_row: i32, delta_col: i32, row_count: usize) {
        let new_row = (self.focused.row as i64 + delta_row as i64)
            .clamp(0, row_count.saturating_sub(1) as i64) as usize;
        let new_col = (self.focused.col as i64 + delta_col as i64)
            .clamp(0, (COLUMN_COUNT - 1) as i64) as usize;

        self.focused = CellPosition::new(new_row, new_col);
        self.ensure_focus_visible(row_count);
    }

    /// Tab: next cell, wrapping to the next row
    pub fn move_to_next_cell(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }

        let mut new_col = self.focused.col + 1;
        let mut new_row = self.focused.row;

        if new_col >= COLUMN_COUNT {
            new_col = 0;
            new_row += 1;
            if new_row >= row_count {
                new_row = row_count - 1;
                new_col = COLUMN_COUNT - 1;
            }
        }

        self.focused = CellPosition::new(new_row, new_col);
        self.ensure_focus_visible(row_count);
    }

    /// Shift+Tab: previous cell, wrapping to the previous row
    pub fn move_to_prev_cell(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }

        if self.focused.col > 0 {
            self.focused.col -= 1;
        } else if self.focused.row > 0 {
            self.focused.row -= 1;
            self.focused.col = COLUMN_COUNT - 1;
        }

        self.ensure_focus_visible(row_count);
    }

    pub fn move_to_first_cell(&mut self, row_count: usize) {
        self.focused = CellPosition::new(0, 0);
        self.ensure_focus_visible(row_count);
    }

    pub fn move_to_last_cell(&mut self, row_count: usize) {
        self.focused = CellPosition::new(row_count.saturating_sub(1), COLUMN_COUNT - 1);
        self.ensure_focus_visible(row_count);
    }

    pub fn move_to_row_start(&mut self, row_count: usize) {
        self.focused.col = 0;
        self.ensure_focus_visible(row_count);
    }

    pub fn move_to_row_end(&mut self, row_count: usize) {
        self.focused.col = COLUMN_COUNT - 1;
        self.ensure_focus_visible(row_count);
    }

    pub fn page_up(&mut self, row_count: usize) {
        let page_size = self.viewport.visible_rows.max(1);
        self.focused.row = self.focused.row.saturating_sub(page_size);
        self.ensure_focus_visible(row_count);
    }

    pub fn page_down(&mut self, row_count: usize) {
        let page_size = self.viewport.visible_rows.max(1);
        self.focused.row = (self.focused.row + page_size).min(row_count.saturating_sub(1));
        self.ensure_focus_visible(row_count);
    }

    /// Scroll the viewport so the focused cell is on screen
    pub fn ensure_focus_visible(&mut self, row_count: usize) {
        self.viewport.ensure_visible(
            self.focused.row,
            self.focused.col,
            row_count,
            COLUMN_COUNT,
        );
    }

    /// Set viewport dimensions (called on resize)
    pub fn set_viewport_size(&mut self, rows: usize, cols: usize, row_count: usize) {
        self.viewport.visible_rows = rows;
        self.viewport.visible_cols = cols;
        self.ensure_focus_visible(row_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, cols: usize) -> GridState {
        let mut grid = GridState::new();
        grid.set_viewport_size(rows, cols, 100);
        grid
    }

    #[test]
    fn test_move_focus_clamps() {
        let mut g = grid(10, 5);
        g.move_focus(-1, -1, 3);
        assert_eq!(g.focused, CellPosition::new(0, 0));
        g.move_focus(10, 30, 3);
        assert_eq!(g.focused, CellPosition::new(2, COLUMN_COUNT - 1));
    }

    #[test]
    fn test_tab_wraps_to_next_row() {
        let mut g = grid(10, 5);
        g.focused = CellPosition::new(0, COLUMN_COUNT - 1);
        g.move_to_next_cell(3);
        assert_eq!(g.focused, CellPosition::new(1, 0));
    }

    #[test]
    fn test_tab_stops_at_last_cell() {
        let mut g = grid(10, 5);
        g.focused = CellPosition::new(2, COLUMN_COUNT - 1);
        g.move_to_next_cell(3);
        assert_eq!(g.focused, CellPosition::new(2, COLUMN_COUNT - 1));
    }

    #[test]
    fn test_shift_tab_wraps_to_previous_row() {
        let mut g = grid(10, 5);
        g.focused = CellPosition::new(1, 0);
        g.move_to_prev_cell(3);
        assert_eq!(g.focused, CellPosition::new(0, COLUMN_COUNT - 1));
        g.focused = CellPosition::new(0, 0);
        g.move_to_prev_cell(3);
        assert_eq!(g.focused, CellPosition::new(0, 0));
    }

    #[test]
    fn test_paging() {
        let mut g = grid(10, 5);
        g.page_down(25);
        assert_eq!(g.focused.row, 10);
        g.page_down(25);
        assert_eq!(g.focused.row, 20);
        g.page_down(25);
        assert_eq!(g.focused.row, 24);
        g.page_up(25);
        assert_eq!(g.focused.row, 14);
        assert!(g.viewport.is_row_visible(14));
    }

    #[test]
    fn test_row_start_end_and_corners() {
        let mut g = grid(10, 5);
        g.focused = CellPosition::new(4, 7);
        g.move_to_row_end(10);
        assert_eq!(g.focused, CellPosition::new(4, COLUMN_COUNT - 1));
        g.move_to_row_start(10);
        assert_eq!(g.focused, CellPosition::new(4, 0));
        g.move_to_last_cell(10);
        assert_eq!(g.focused, CellPosition::new(9, COLUMN_COUNT - 1));
        g.move_to_first_cell(10);
        assert_eq!(g.focused, CellPosition::new(0, 0));
    }

    #[test]
    fn test_navigation_on_empty_table_is_noop() {
        let mut g = grid(10, 5);
        g.move_to_next_cell(0);
        g.move_to_prev_cell(0);
        assert_eq!(g.focused, CellPosition::new(0, 0));
    }
}
