//! Execution of remote commands
//!
//! `perform` runs one remote `Cmd` to completion against a `RemoteStore` and
//! returns the completion message. The runtime calls it on a worker thread;
//! tests call it directly.

use crate::commands::Cmd;
use crate::messages::{Msg, RemoteMsg};
use crate::remote::RemoteStore;

/// Run a single remote command, returning its completion message
///
/// Returns `None` for commands that do not touch the remote store.
pub fn perform(store: &dyn RemoteStore, cmd: Cmd) -> Option<Msg> {
    let msg = match cmd {
        Cmd::FetchAll => RemoteMsg::Fetched(store.fetch_all().map_err(|e| e.to_string())),
        Cmd::SaveAll { rows } => RemoteMsg::Saved(store.save_all(&rows).map_err(|e| e.to_string())),
        Cmd::CreateRow { row } => {
            RemoteMsg::RowCreated(store.create_row(&row).map_err(|e| e.to_string()))
        }
        Cmd::UpdateRow { id, row } => {
            RemoteMsg::RowUpdated(store.update_row(&id, &row).map_err(|e| e.to_string()))
        }
        Cmd::DeleteRow { id } => {
            RemoteMsg::RowDeleted(store.delete_row(&id).map_err(|e| e.to_string()))
        }
        Cmd::None | Cmd::Redraw | Cmd::Batch(_) | Cmd::Quit => return None,
    };
    Some(Msg::Remote(msg))
}

/// Flatten a command tree into its leaf commands, in order
pub fn flatten(cmd: Cmd) -> Vec<Cmd> {
    match cmd {
        Cmd::Batch(cmds) => cmds.into_iter().flat_map(flatten).collect(),
        Cmd::None => Vec::new(),
        other => vec![other],
    }
}
