//! Grid message handlers (focus navigation, in-place cell editing)
//!
//! Leaving a cell that is being edited commits the buffer through
//! `EditorState::edit_cell`, even when the text did not change. Every focus
//! change records the new cell as the selection.

use crate::commands::Cmd;
use crate::messages::{Direction, GridMsg};
use crate::model::AppModel;

/// Handle grid messages
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    let rows = model.editor.row_count();
    let editing = model.ui.grid.is_editing();

    match msg {
        // === Focus Movement ===
        GridMsg::Move(Direction::Left) if editing => {
            model.ui.grid.edit_cursor_left();
        }
        GridMsg::Move(Direction::Right) if editing => {
            model.ui.grid.edit_cursor_right();
        }
        GridMsg::Move(direction) => {
            commit_edit(model);
            let (dr, dc) = match direction {
                Direction::Up => (-1, 0),
                Direction::Down => (1, 0),
                Direction::Left => (0, -1),
                Direction::Right => (0, 1),
            };
            model.ui.grid.move_focus(dr, dc, rows);
            select_focused(model);
        }
        GridMsg::NextCell => {
            commit_edit(model);
            model.ui.grid.move_to_next_cell(rows);
            select_focused(model);
        }
        GridMsg::PrevCell => {
            commit_edit(model);
            model.ui.grid.move_to_prev_cell(rows);
            select_focused(model);
        }
        GridMsg::RowStart if editing => model.ui.grid.edit_cursor_home(),
        GridMsg::RowEnd if editing => model.ui.grid.edit_cursor_end(),
        GridMsg::RowStart => {
            model.ui.grid.move_to_row_start(rows);
            select_focused(model);
        }
        GridMsg::RowEnd => {
            model.ui.grid.move_to_row_end(rows);
            select_focused(model);
        }
        GridMsg::FirstCell => {
            commit_edit(model);
            model.ui.grid.move_to_first_cell(rows);
            select_focused(model);
        }
        GridMsg::LastCell => {
            commit_edit(model);
            model.ui.grid.move_to_last_cell(rows);
            select_focused(model);
        }
        GridMsg::PageUp => {
            commit_edit(model);
            model.ui.grid.page_up(rows);
            select_focused(model);
        }
        GridMsg::PageDown => {
            commit_edit(model);
            model.ui.grid.page_down(rows);
            select_focused(model);
        }
        GridMsg::FocusCell { row, col } => {
            commit_edit(model);
            model.ui.grid.focus_cell(row, col, rows);
            select_focused(model);
        }

        // === Editing ===
        GridMsg::Enter if editing => {
            commit_edit(model);
            model.ui.grid.move_focus(1, 0, rows);
            select_focused(model);
        }
        GridMsg::Enter => {
            let current = model.focused_value()?.display_text();
            model.ui.grid.start_editing(current);
        }
        GridMsg::TypeChar(ch) if editing => model.ui.grid.edit_insert_char(ch),
        GridMsg::TypeChar(ch) => {
            let current = model.focused_value()?.display_text();
            model.ui.grid.start_editing_with_char(current, ch);
        }
        GridMsg::Backspace => {
            if !editing {
                return None;
            }
            model.ui.grid.edit_delete_backward();
        }
        GridMsg::CancelEdit => {
            if !editing {
                return None;
            }
            model.ui.grid.cancel_edit();
        }
        GridMsg::CommitEdit => {
            if !editing {
                return None;
            }
            commit_edit(model);
        }
    }

    Some(Cmd::Redraw)
}

/// Write the edit buffer (if any) back to the table
pub(super) fn commit_edit(model: &mut AppModel) {
    let Some(edit) = model.ui.grid.confirm_edit() else {
        return;
    };
    let column = edit.position.column();
    if let Err(e) = model
        .editor
        .edit_cell(edit.position.row, column, &edit.new_value)
    {
        tracing::warn!("Dropped edit of {}: {}", column, e);
    }
}

/// Record the focused cell (with its current value) as the selection
pub(super) fn select_focused(model: &mut AppModel) {
    let pos = model.ui.grid.focused;
    let column = pos.column();
    if let Some(value) = model.editor.cell(pos.row, column).cloned() {
        model.editor.select(pos.row, column, value);
    }
}
