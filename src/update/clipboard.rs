//! Selection and clipboard message handlers

use crate::commands::Cmd;
use crate::messages::ClipboardMsg;
use crate::model::AppModel;

use super::status;

/// Handle clipboard messages
///
/// While a cell is being edited, Paste inserts the clipboard text into the
/// edit buffer and Delete removes the character under the cursor; the value
/// reaches the table when the edit is committed.
pub fn update_clipboard(model: &mut AppModel, msg: ClipboardMsg) -> Option<Cmd> {
    match msg {
        ClipboardMsg::Select { row, column, value } => {
            model.editor.select(row, column, value);
            None
        }

        ClipboardMsg::Copy => {
            if model.editor.copy() {
                model.ui.show_status(status::COPIED);
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        ClipboardMsg::Paste => {
            if model.ui.grid.is_editing() {
                let text = model
                    .editor
                    .clipboard
                    .as_ref()
                    .map(|c| c.value.display_text())?;
                if let Some(edit) = &mut model.ui.grid.editing {
                    edit.insert_text(&text);
                }
                return Some(Cmd::Redraw);
            }

            match model.editor.paste() {
                Ok(true) => {
                    model.ui.show_status(status::PASTED);
                    Some(Cmd::Redraw)
                }
                Ok(false) => None,
                Err(e) => {
                    tracing::warn!("Paste failed: {}", e);
                    None
                }
            }
        }

        ClipboardMsg::DeleteSelection => {
            if model.ui.grid.is_editing() {
                model.ui.grid.edit_delete_forward();
                return Some(Cmd::Redraw);
            }

            match model.editor.delete_selection() {
                Ok(true) => Some(Cmd::Redraw),
                Ok(false) => None,
                Err(e) => {
                    tracing::warn!("Delete failed: {}", e);
                    None
                }
            }
        }
    }
}
