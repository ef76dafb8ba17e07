//! Grid rendering: column headers, cost rows and per-row actions

use std::ops::Range;

use ratatui::layout::{Alignment, Constraint, Flex, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row as TableRow, Table};
use ratatui::Frame;

use costgrid::grid::{column_widths, CellEditState};
use costgrid::model::{AppModel, CellValue, Column, COLUMN_COUNT};

use super::{palette, ACTIONS_WIDTH, COLUMN_SPACING, ROW_NUMBER_WIDTH};

const UPDATE_LABEL: &str = "[Update]";
const ACTIONS_LABEL: &str = "[Update] [Delete]";

/// Data columns that fit in `available` cells
///
/// Starts at `left_col` and shifts right until `focus_col` is included.
/// At least one column is always returned.
pub fn visible_columns(
    widths: &[usize; COLUMN_COUNT],
    left_col: usize,
    focus_col: usize,
    available: usize,
) -> Range<usize> {
    let fit = |start: usize| {
        let mut used = 0;
        let mut end = start;
        while end < COLUMN_COUNT {
            let w = widths[end] + COLUMN_SPACING as usize;
            if used + w > available && end > start {
                break;
            }
            used += w;
            end += 1;
        }
        end
    };

    let focus_col = focus_col.min(COLUMN_COUNT - 1);
    let mut start = left_col.min(focus_col);
    let mut end = fit(start);
    while end <= focus_col && start < focus_col {
        start += 1;
        end = fit(start);
    }
    start..end
}

/// What lies under a mouse position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridHit {
    Cell { row: usize, col: usize },
    Update { row: usize },
    Delete { row: usize },
}

/// Columns and rows currently drawn into a grid area
struct GridLayout {
    widths: [usize; COLUMN_COUNT],
    columns: Range<usize>,
    rows: Range<usize>,
}

impl GridLayout {
    fn new(area: Rect, model: &AppModel) -> Self {
        let grid = &model.ui.grid;
        let widths = column_widths(&model.editor.table);
        let data_width = area
            .width
            .saturating_sub(ROW_NUMBER_WIDTH + ACTIONS_WIDTH + 2 * COLUMN_SPACING)
            as usize;
        let columns = visible_columns(
            &widths,
            grid.viewport.left_col,
            grid.focused.col,
            data_width,
        );

        // One line goes to the header
        let visible_rows = area.height.saturating_sub(1) as usize;
        let row_count = model.editor.row_count();
        let first = grid.viewport.top_row.min(row_count);
        let last = (first + visible_rows).min(row_count);

        Self {
            widths,
            columns,
            rows: first..last,
        }
    }
}

/// Map a terminal position to the grid cell or row action under it
///
/// Mirrors the column placement of `render_grid`: row numbers, then the
/// visible data columns, then the actions, separated by `COLUMN_SPACING`.
pub fn hit_test(area: Rect, model: &AppModel, x: u16, y: u16) -> Option<GridHit> {
    if x < area.x || x >= area.right() || y <= area.y || y >= area.bottom() {
        return None;
    }

    let layout = GridLayout::new(area, model);
    let row = layout.rows.start + (y - area.y - 1) as usize;
    if !layout.rows.contains(&row) {
        return None;
    }

    let x = (x - area.x) as usize;
    let mut left = (ROW_NUMBER_WIDTH + COLUMN_SPACING) as usize;
    if x < left {
        return None;
    }
    for col in layout.columns.clone() {
        let right = left + layout.widths[col];
        if x < right {
            return Some(GridHit::Cell { row, col });
        }
        left = right + COLUMN_SPACING as usize;
        if x < left {
            return None;
        }
    }

    let offset = x - left;
    if offset < UPDATE_LABEL.len() {
        Some(GridHit::Update { row })
    } else if offset > UPDATE_LABEL.len() && offset < ACTIONS_LABEL.len() {
        Some(GridHit::Delete { row })
    } else {
        None
    }
}

pub fn render_grid(frame: &mut Frame, area: Rect, model: &AppModel) {
    let grid = &model.ui.grid;
    let GridLayout {
        widths,
        columns,
        rows: visible,
    } = GridLayout::new(area, model);
    let row_count = model.editor.row_count();

    let header = TableRow::new(
        std::iter::once(Cell::from("#"))
            .chain(Column::ALL[columns.clone()].iter().map(|c| Cell::from(c.name())))
            .chain(std::iter::once(Cell::from("Actions"))),
    )
    .style(palette::HEADER);

    let rows = visible.map(|row_idx| {
        let focused_row = row_idx == grid.focused.row;
        let row = &model.editor.table[row_idx];

        let cells = columns.clone().map(|col_idx| {
            let column = Column::ALL[col_idx];
            let is_focused = focused_row && col_idx == grid.focused.col;

            match &grid.editing {
                Some(edit) if is_focused && edit.position.row == row_idx => {
                    Cell::from(edit_line(edit)).style(palette::EDITING_CELL)
                }
                _ => {
                    let value = row.get(column);
                    let style = if is_focused {
                        palette::FOCUSED_CELL
                    } else if matches!(value, CellValue::Number(_)) {
                        palette::NUMBER
                    } else {
                        Default::default()
                    };
                    Cell::from(value.display_text()).style(style)
                }
            }
        });

        let cells = std::iter::once(
            Cell::from(format!("{}", row_idx + 1)).style(palette::ROW_NUMBER),
        )
        .chain(cells)
        .chain(std::iter::once(
            Cell::from(ACTIONS_LABEL).style(palette::ACTION),
        ));

        let table_row = TableRow::new(cells);
        if focused_row {
            table_row.style(palette::FOCUSED_ROW)
        } else {
            table_row
        }
    });

    let constraints = std::iter::once(Constraint::Length(ROW_NUMBER_WIDTH))
        .chain(columns.clone().map(|c| Constraint::Length(widths[c] as u16)))
        .chain(std::iter::once(Constraint::Length(ACTIONS_WIDTH)));

    // Packed from the left so `hit_test` can find the columns again
    let table = Table::new(rows, constraints)
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start);
    frame.render_widget(table, area);

    if row_count == 0 && area.height > 1 {
        let text = if model.ui.is_loading {
            "Loading rows..."
        } else {
            "No rows. Press Ctrl+N to create one, Ctrl+R to reload."
        };
        let body = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(text)
                .style(palette::EMPTY)
                .alignment(Alignment::Center),
            body,
        );
    }
}

/// Edit buffer with the cursor shown as a reversed cell
fn edit_line(edit: &CellEditState) -> Line<'static> {
    let cursor = edit.cursor_char_position();
    let before: String = edit.buffer().chars().take(cursor).collect();
    let at: String = edit
        .buffer()
        .chars()
        .nth(cursor)
        .map(String::from)
        .unwrap_or_else(|| " ".to_string());
    let after: String = edit.buffer().chars().skip(cursor + 1).collect();

    Line::from(vec![
        Span::raw(before),
        Span::styled(at, palette::EDIT_CURSOR),
        Span::raw(after),
    ])
}
