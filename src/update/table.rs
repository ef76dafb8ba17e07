//! Data store message handlers (cell edits, undo/redo)

use crate::commands::Cmd;
use crate::messages::TableMsg;
use crate::model::AppModel;

/// Handle table messages
pub fn update_table(model: &mut AppModel, msg: TableMsg) -> Option<Cmd> {
    match msg {
        TableMsg::EditCell { row, column, value } => {
            match model.editor.edit_cell(row, column, &value) {
                Ok(()) => Some(Cmd::Redraw),
                Err(e) => {
                    tracing::warn!("Rejected edit of {}: {}", column, e);
                    None
                }
            }
        }

        TableMsg::Undo => {
            // A pending in-place edit belongs to the table being replaced
            model.ui.grid.cancel_edit();
            if model.editor.undo() {
                clamp_grid(model);
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        TableMsg::Redo => {
            model.ui.grid.cancel_edit();
            if model.editor.redo() {
                clamp_grid(model);
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}

/// Keep the grid focus inside the table after its row count changed
pub(super) fn clamp_grid(model: &mut AppModel) {
    let rows = model.editor.row_count();
    model.ui.grid.clamp_focus(rows);
    model.ui.grid.ensure_focus_visible(rows);
}
