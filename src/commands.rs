//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::keymap::{Command as KeymapCommand, Keymap};
use crate::model::{Row, RowId, Table};

// ============================================================================
// Footer Command Registry
// ============================================================================

/// Identifies a user-facing command shown in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Save,
    CreateRow,
    UpdateRow,
    DeleteRow,
    Undo,
    Redo,
    Copy,
    Paste,
    Refresh,
    Quit,
}

/// A command definition for the footer
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    pub label: &'static str,
    pub keybinding: Option<&'static str>,
}

/// Static registry of footer commands, in display order
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::Save,
        label: "Save",
        keybinding: Some("Ctrl+S"),
    },
    CommandDef {
        id: CommandId::CreateRow,
        label: "Create Row",
        keybinding: Some("Ctrl+N"),
    },
    CommandDef {
        id: CommandId::UpdateRow,
        label: "Update",
        keybinding: Some("Ctrl+U"),
    },
    CommandDef {
        id: CommandId::DeleteRow,
        label: "Delete",
        keybinding: Some("Ctrl+D"),
    },
    CommandDef {
        id: CommandId::Undo,
        label: "Undo",
        keybinding: Some("Ctrl+Z"),
    },
    CommandDef {
        id: CommandId::Redo,
        label: "Redo",
        keybinding: Some("Ctrl+Y"),
    },
    CommandDef {
        id: CommandId::Copy,
        label: "Copy",
        keybinding: Some("Ctrl+C"),
    },
    CommandDef {
        id: CommandId::Paste,
        label: "Paste",
        keybinding: Some("Ctrl+V"),
    },
    CommandDef {
        id: CommandId::Refresh,
        label: "Reload",
        keybinding: Some("Ctrl+R"),
    },
    CommandDef {
        id: CommandId::Quit,
        label: "Quit",
        keybinding: Some("Ctrl+Q"),
    },
];

impl CommandId {
    /// Map to keymap::Command for keybinding lookup
    pub fn to_keymap_command(self) -> KeymapCommand {
        match self {
            CommandId::Save => KeymapCommand::SaveAll,
            CommandId::CreateRow => KeymapCommand::CreateRow,
            CommandId::UpdateRow => KeymapCommand::UpdateRow,
            CommandId::DeleteRow => KeymapCommand::DeleteRow,
            CommandId::Undo => KeymapCommand::Undo,
            CommandId::Redo => KeymapCommand::Redo,
            CommandId::Copy => KeymapCommand::Copy,
            CommandId::Paste => KeymapCommand::Paste,
            CommandId::Refresh => KeymapCommand::Refresh,
            CommandId::Quit => KeymapCommand::Quit,
        }
    }
}

/// Keybinding display string for a command, from the live keymap
///
/// Falls back to the static hint when the user keymap has no binding.
pub fn keybinding_for_command(id: CommandId, keymap: &Keymap) -> Option<String> {
    keymap
        .display_for(id.to_keymap_command())
        .or_else(|| keybinding_for_command_static(id).map(str::to_string))
}

/// Keybinding display string from the static registry
pub fn keybinding_for_command_static(id: CommandId) -> Option<&'static str> {
    COMMANDS
        .iter()
        .find(|cmd| cmd.id == id)
        .and_then(|cmd| cmd.keybinding)
}

// ============================================================================
// Side-effect Commands
// ============================================================================

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw
    Redraw,
    /// GET the whole collection
    FetchAll,
    /// PUT the whole collection
    SaveAll { rows: Table },
    /// POST one row
    CreateRow { row: Row },
    /// PUT one row by identifier
    UpdateRow { id: RowId, row: Row },
    /// DELETE one row by identifier
    DeleteRow { id: RowId },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Starting a request shows the busy indicator
            Cmd::FetchAll
            | Cmd::SaveAll { .. }
            | Cmd::CreateRow { .. }
            | Cmd::UpdateRow { .. }
            | Cmd::DeleteRow { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::Quit => false,
        }
    }

    /// Whether this command (or any command in a batch) talks to the remote store
    pub fn is_remote(&self) -> bool {
        match self {
            Cmd::FetchAll
            | Cmd::SaveAll { .. }
            | Cmd::CreateRow { .. }
            | Cmd::UpdateRow { .. }
            | Cmd::DeleteRow { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_remote()),
            Cmd::None | Cmd::Redraw | Cmd::Quit => false,
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
