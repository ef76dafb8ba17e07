//! Command enum representing all executable grid actions
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to one or more `Msg` values for the Elm-style update loop.

use std::str::FromStr;

use crate::messages::{AppMsg, ClipboardMsg, Direction, GridMsg, Msg, RemoteMsg, TableMsg};

/// All commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Focus Movement
    // ========================================================================
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Next cell, wrapping to the next row
    NextCell,
    /// Previous cell, wrapping to the previous row
    PrevCell,
    RowStart,
    RowEnd,
    FirstCell,
    LastCell,
    PageUp,
    PageDown,

    // ========================================================================
    // Cell Editing
    // ========================================================================
    /// Start editing, or commit and move down
    Enter,
    Backspace,
    /// Discard the edit buffer
    CancelEdit,

    // ========================================================================
    // Clipboard
    // ========================================================================
    Copy,
    Paste,
    /// Clear the selected cell
    DeleteSelection,

    // ========================================================================
    // History
    // ========================================================================
    Undo,
    Redo,

    // ========================================================================
    // Remote
    // ========================================================================
    /// PUT the whole table
    SaveAll,
    /// POST a blank row
    CreateRow,
    /// PUT the focused row
    UpdateRow,
    /// DELETE the focused row
    DeleteRow,
    /// Reload every row
    Refresh,

    // ========================================================================
    // App
    // ========================================================================
    Quit,

    /// Removes a default binding when used in a user keymap
    Unbound,
}

impl Command {
    /// Convert this command to message(s) for the Elm update loop
    pub fn to_msgs(self) -> Vec<Msg> {
        use Command::*;

        match self {
            MoveUp => vec![Msg::move_focus(Direction::Up)],
            MoveDown => vec![Msg::move_focus(Direction::Down)],
            MoveLeft => vec![Msg::move_focus(Direction::Left)],
            MoveRight => vec![Msg::move_focus(Direction::Right)],
            NextCell => vec![Msg::Grid(GridMsg::NextCell)],
            PrevCell => vec![Msg::Grid(GridMsg::PrevCell)],
            RowStart => vec![Msg::Grid(GridMsg::RowStart)],
            RowEnd => vec![Msg::Grid(GridMsg::RowEnd)],
            FirstCell => vec![Msg::Grid(GridMsg::FirstCell)],
            LastCell => vec![Msg::Grid(GridMsg::LastCell)],
            PageUp => vec![Msg::Grid(GridMsg::PageUp)],
            PageDown => vec![Msg::Grid(GridMsg::PageDown)],

            Enter => vec![Msg::Grid(GridMsg::Enter)],
            Backspace => vec![Msg::Grid(GridMsg::Backspace)],
            CancelEdit => vec![Msg::Grid(GridMsg::CancelEdit)],

            Copy => vec![Msg::Clipboard(ClipboardMsg::Copy)],
            Paste => vec![Msg::Clipboard(ClipboardMsg::Paste)],
            DeleteSelection => vec![Msg::Clipboard(ClipboardMsg::DeleteSelection)],

            Undo => vec![Msg::Table(TableMsg::Undo)],
            Redo => vec![Msg::Table(TableMsg::Redo)],

            SaveAll => vec![Msg::Remote(RemoteMsg::SaveAll)],
            CreateRow => vec![Msg::Remote(RemoteMsg::CreateRow)],
            UpdateRow => vec![Msg::Remote(RemoteMsg::UpdateFocusedRow)],
            DeleteRow => vec![Msg::Remote(RemoteMsg::DeleteFocusedRow)],
            Refresh => vec![Msg::Remote(RemoteMsg::FetchAll)],

            Quit => vec![Msg::App(AppMsg::Quit)],

            Unbound => vec![],
        }
    }

    /// Display name for help text and logs
    pub fn display_name(self) -> &'static str {
        use Command::*;

        match self {
            MoveUp => "Move Up",
            MoveDown => "Move Down",
            MoveLeft => "Move Left",
            MoveRight => "Move Right",
            NextCell => "Next Cell",
            PrevCell => "Previous Cell",
            RowStart => "Row Start",
            RowEnd => "Row End",
            FirstCell => "First Cell",
            LastCell => "Last Cell",
            PageUp => "Page Up",
            PageDown => "Page Down",
            Enter => "Edit Cell",
            Backspace => "Backspace",
            CancelEdit => "Cancel Edit",
            Copy => "Copy",
            Paste => "Paste",
            DeleteSelection => "Clear Cell",
            Undo => "Undo",
            Redo => "Redo",
            SaveAll => "Save",
            CreateRow => "Create Row",
            UpdateRow => "Update Row",
            DeleteRow => "Delete Row",
            Refresh => "Reload",
            Quit => "Quit",
            Unbound => "Unbound",
        }
    }
}

/// Parse command names as written in keymap YAML
impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MoveUp" => Ok(Command::MoveUp),
            "MoveDown" => Ok(Command::MoveDown),
            "MoveLeft" => Ok(Command::MoveLeft),
            "MoveRight" => Ok(Command::MoveRight),
            "NextCell" => Ok(Command::NextCell),
            "PrevCell" => Ok(Command::PrevCell),
            "RowStart" => Ok(Command::RowStart),
            "RowEnd" => Ok(Command::RowEnd),
            "FirstCell" => Ok(Command::FirstCell),
            "LastCell" => Ok(Command::LastCell),
            "PageUp" => Ok(Command::PageUp),
            "PageDown" => Ok(Command::PageDown),

            "Enter" | "EditCell" => Ok(Command::Enter),
            "Backspace" => Ok(Command::Backspace),
            "CancelEdit" | "Escape" => Ok(Command::CancelEdit),

            "Copy" => Ok(Command::Copy),
            "Paste" => Ok(Command::Paste),
            "DeleteSelection" => Ok(Command::DeleteSelection),

            "Undo" => Ok(Command::Undo),
            "Redo" => Ok(Command::Redo),

            "SaveAll" | "Save" => Ok(Command::SaveAll),
            "CreateRow" => Ok(Command::CreateRow),
            "UpdateRow" => Ok(Command::UpdateRow),
            "DeleteRow" => Ok(Command::DeleteRow),
            "Refresh" => Ok(Command::Refresh),

            "Quit" => Ok(Command::Quit),
            "Unbound" => Ok(Command::Unbound),

            _ => Err(()),
        }
    }
}
