//! Grid viewport calculations
//!
//! Tracks which portion of the cost grid is visible.

/// Viewport state for the grid
#[derive(Debug, Clone, Default)]
pub struct GridViewport {
    /// First visible row (0-indexed)
    pub top_row: usize,
    /// First visible column (0-indexed)
    pub left_col: usize,
    /// Number of rows that fit in the viewport
    pub visible_rows: usize,
    /// Approximate number of columns visible (depends on column widths)
    pub visible_cols: usize,
}

impl GridViewport {
    pub fn new(visible_rows: usize, visible_cols: usize) -> Self {
        Self {
            top_row: 0,
            left_col: 0,
            visible_rows,
            visible_cols,
        }
    }

    /// Scroll so that (row, col) is inside the visible region
    pub fn ensure_visible(&mut self, row: usize, col: usize, total_rows: usize, total_cols: usize) {
        if row < self.top_row {
            self.top_row = row;
        } else if self.visible_rows > 0 && row >= self.top_row + self.visible_rows {
            self.top_row = row + 1 - self.visible_rows;
        }

        if col < self.left_col {
            self.left_col = col;
        } else if self.visible_cols > 0 && col >= self.left_col + self.visible_cols {
            self.left_col = col + 1 - self.visible_cols;
        }

        self.top_row = self.top_row.min(total_rows.saturating_sub(self.visible_rows));
        self.left_col = self.left_col.min(total_cols.saturating_sub(self.visible_cols));
    }

    pub fn is_row_visible(&self, row: usize) -> bool {
        row >= self.top_row && row < self.top_row + self.visible_rows
    }
}
