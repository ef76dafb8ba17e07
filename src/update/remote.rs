//! Remote store message handlers
//!
//! Requests become `Cmd`s for the runtime; completions come back as
//! `RemoteMsg` results. Create, update and delete are followed by a full
//! refetch on success. Nothing is rolled back or retried on failure.

use crate::commands::Cmd;
use crate::messages::RemoteMsg;
use crate::model::{AppModel, Row, RowId};
use crate::remote::RemoteError;

use super::grid::{commit_edit, select_focused};
use super::status;
use super::table::clamp_grid;

/// Handle remote messages
pub fn update_remote(model: &mut AppModel, msg: RemoteMsg) -> Option<Cmd> {
    match msg {
        RemoteMsg::FetchAll => {
            model.ui.is_loading = true;
            Some(Cmd::FetchAll)
        }

        RemoteMsg::Fetched(result) => {
            model.ui.is_loading = false;
            match result {
                Ok(rows) => {
                    tracing::info!("Fetched {} rows", rows.len());
                    // An open edit buffer would point at a row that may have moved
                    model.ui.grid.cancel_edit();
                    model.editor.load(rows);
                    clamp_grid(model);
                    // The highlighted cell counts as focused once rows exist
                    if model.editor.selection.is_none() {
                        select_focused(model);
                    }
                }
                Err(e) => {
                    tracing::error!("Error fetching data: {}", e);
                }
            }
            Some(Cmd::Redraw)
        }

        RemoteMsg::SaveAll => {
            commit_edit(model);
            model.ui.is_saving = true;
            Some(Cmd::SaveAll {
                rows: model.editor.table.clone(),
            })
        }

        RemoteMsg::Saved(result) => {
            model.ui.is_saving = false;
            match result {
                Ok(()) => {
                    tracing::info!("Saved {} rows", model.editor.row_count());
                    model.editor.mark_saved();
                    model.ui.show_status(status::SAVE_OK);
                }
                Err(e) => {
                    tracing::error!("Error saving data: {}", e);
                    model.ui.show_status(status::SAVE_FAILED);
                }
            }
            Some(Cmd::Redraw)
        }

        RemoteMsg::CreateRow => {
            model.ui.is_saving = true;
            Some(Cmd::CreateRow { row: Row::blank() })
        }

        RemoteMsg::RowCreated(result) => {
            model.ui.is_saving = false;
            match result {
                Ok(()) => {
                    tracing::info!("Row created");
                    model.ui.show_status(status::CREATE_OK);
                    refetch(model)
                }
                Err(e) => {
                    tracing::error!("Error creating row: {}", e);
                    model.ui.show_status(status::CREATE_FAILED);
                    Some(Cmd::Redraw)
                }
            }
        }

        RemoteMsg::UpdateFocusedRow => {
            commit_edit(model);
            let row = model.editor.row(model.ui.grid.focused.row)?.clone();
            let id = row.id.clone();
            request_update(model, id, row)
        }

        RemoteMsg::UpdateRow { id, row } => request_update(model, id, row),

        RemoteMsg::RowUpdated(result) => {
            model.ui.is_saving = false;
            match result {
                Ok(()) => {
                    tracing::info!("Row updated");
                    model.ui.show_status(status::UPDATE_OK);
                    refetch(model)
                }
                Err(e) => {
                    tracing::error!("Error updating row: {}", e);
                    model.ui.show_status(status::UPDATE_FAILED);
                    Some(Cmd::Redraw)
                }
            }
        }

        RemoteMsg::DeleteFocusedRow => {
            commit_pending_edit(model, "delete");
            let id = model.editor.row(model.ui.grid.focused.row)?.id.clone();
            request_delete(model, id)
        }

        RemoteMsg::DeleteRow { id } => {
            commit_pending_edit(model, "delete");
            request_delete(model, id)
        }

        RemoteMsg::RowDeleted(result) => {
            model.ui.is_saving = false;
            match result {
                Ok(()) => {
                    tracing::info!("Row deleted");
                    model.ui.show_status(status::DELETE_OK);
                    refetch(model)
                }
                Err(e) => {
                    tracing::error!("Error deleting row: {}", e);
                    model.ui.show_status(status::DELETE_FAILED);
                    Some(Cmd::Redraw)
                }
            }
        }
    }
}

/// Leave no edit buffer behind for the refetch that follows a mutation
fn commit_pending_edit(model: &mut AppModel, action: &str) {
    if model.ui.grid.is_editing() {
        tracing::debug!("Committing pending cell edit before {}", action);
        commit_edit(model);
    }
}

fn refetch(model: &mut AppModel) -> Option<Cmd> {
    model.ui.is_loading = true;
    Some(Cmd::FetchAll)
}

/// Rows that were never synced have no identifier and cannot be addressed
fn request_update(model: &mut AppModel, id: Option<RowId>, row: Row) -> Option<Cmd> {
    match id.ok_or(RemoteError::MissingId) {
        Ok(id) => {
            model.ui.is_saving = true;
            Some(Cmd::UpdateRow { id, row })
        }
        Err(e) => {
            tracing::warn!("Row not updated: {}", e);
            model.ui.show_status(status::UPDATE_FAILED);
            Some(Cmd::Redraw)
        }
    }
}

fn request_delete(model: &mut AppModel, id: Option<RowId>) -> Option<Cmd> {
    match id.ok_or(RemoteError::MissingId) {
        Ok(id) => {
            model.ui.is_saving = true;
            Some(Cmd::DeleteRow { id })
        }
        Err(e) => {
            tracing::warn!("Row not deleted: {}", e);
            model.ui.show_status(status::DELETE_FAILED);
            Some(Cmd::Redraw)
        }
    }
}
