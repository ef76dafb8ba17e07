//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod clipboard;
mod grid;
mod remote;
mod table;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::sync_status_bar;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::EditorSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use clipboard::update_clipboard;
pub use grid::update_grid;
pub use remote::update_remote;
pub use table::update_table;
pub use ui::update_ui;

/// Status messages shown after user actions
pub mod status {
    pub const SAVE_OK: &str = "Data saved successfully.";
    pub const SAVE_FAILED: &str = "Error saving data. Please try again.";
    pub const CREATE_OK: &str = "Row created successfully.";
    pub const CREATE_FAILED: &str = "Error creating row. Please try again.";
    pub const UPDATE_OK: &str = "Row updated successfully.";
    pub const UPDATE_FAILED: &str = "Error updating row. Please try again.";
    pub const DELETE_OK: &str = "Row deleted successfully.";
    pub const DELETE_FAILED: &str = "Error deleting row. Please try again.";
    pub const COPIED: &str = "Cell data copied.";
    pub const PASTED: &str = "Cell data pasted.";
}

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Table(m) => table::update_table(model, m),
        Msg::Clipboard(m) => clipboard::update_clipboard(model, m),
        Msg::Grid(m) => grid::update_grid(model, m),
        Msg::Remote(m) => remote::update_remote(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    sync_status_bar(model);
    result
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after editor state and logs diffs for debugging.
/// Tick messages are not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::Tick));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = EditorSnapshot::from_editor(&model.editor);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = EditorSnapshot::from_editor(&model.editor);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "editor", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Completion messages carrying whole tables are shortened to their row count.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::RemoteMsg;

    match msg {
        Msg::Table(m) => format!("Table::{:?}", m),
        Msg::Clipboard(m) => format!("Clipboard::{:?}", m),
        Msg::Grid(m) => format!("Grid::{:?}", m),
        Msg::Remote(RemoteMsg::Fetched(Ok(rows))) => {
            format!("Remote::Fetched(Ok({} rows))", rows.len())
        }
        Msg::Remote(RemoteMsg::UpdateRow { id, .. }) => format!("Remote::UpdateRow({:?})", id),
        Msg::Remote(m) => format!("Remote::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
