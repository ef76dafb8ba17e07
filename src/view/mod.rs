//! View module - terminal rendering
//!
//! Draws the whole screen from the model each frame:
//!
//! ```text
//! ┌ grid: header row, one line per row, [Update] [Delete] actions ┐
//! │ ...                                                           │
//! ├ status bar: message / busy ............ focus | rows | undo   ┤
//! └ footer: key hints from the command registry                   ┘
//! ```

pub mod grid;
pub mod status;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::Frame;

use costgrid::keymap::Keymap;
use costgrid::model::AppModel;

/// Width of the leading row-number column
pub const ROW_NUMBER_WIDTH: u16 = 5;
/// Width of the trailing "[Update] [Delete]" column
pub const ACTIONS_WIDTH: u16 = 17;
/// Lines below the grid: status bar and footer
const CHROME_HEIGHT: u16 = 2;
/// Spacing between table columns
const COLUMN_SPACING: u16 = 1;

/// Size of the area available to data cells for a terminal of the given size
///
/// This is what `AppMsg::Resize` carries, so the grid viewport matches what
/// the renderer can actually show.
pub fn grid_cell_area(width: u16, height: u16) -> (u16, u16) {
    let cells_width =
        width.saturating_sub(ROW_NUMBER_WIDTH + ACTIONS_WIDTH + 2 * COLUMN_SPACING);
    // One line goes to the column header row
    let cells_height = height.saturating_sub(CHROME_HEIGHT + 1);
    (cells_width, cells_height)
}

/// Colors used across the screen
pub(crate) mod palette {
    use super::*;

    pub const HEADER: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    pub const FOCUSED_ROW: Style = Style::new().bg(Color::Rgb(40, 44, 52));
    pub const FOCUSED_CELL: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
    pub const EDITING_CELL: Style = Style::new().fg(Color::White).bg(Color::Blue);
    pub const EDIT_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
    pub const ROW_NUMBER: Style = Style::new().fg(Color::DarkGray);
    pub const NUMBER: Style = Style::new().fg(Color::LightGreen);
    pub const ACTION: Style = Style::new().fg(Color::LightBlue);
    pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
    pub const BUSY: Style = Style::new()
        .fg(Color::Yellow)
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    pub const FOOTER_KEY: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    pub const FOOTER_LABEL: Style = Style::new().fg(Color::Gray);
    pub const EMPTY: Style = Style::new().fg(Color::DarkGray);
}

/// Split the screen into grid, status bar and footer
pub fn screen_areas(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Draw one frame
pub fn render(frame: &mut Frame, model: &AppModel, keymap: &Keymap) {
    let [grid_area, status_area, footer_area] = screen_areas(frame.area());

    grid::render_grid(frame, grid_area, model);
    status::render_status_bar(frame, status_area, model);
    status::render_footer(frame, footer_area, keymap);
}
