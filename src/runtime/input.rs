//! Keyboard input handling
//!
//! Bound keys go through the keymap (`Keystroke` → `Command` → `Msg`s).
//! Printable keys with no binding are typed into the focused cell. Every
//! message is applied to the live model at dispatch time.

use crossterm::event::KeyEvent;

use costgrid::commands::Cmd;
use costgrid::keymap::{keystroke_from_crossterm, typed_char, Command, Keymap};
use costgrid::messages::{GridMsg, Msg};
use costgrid::model::AppModel;
use costgrid::update::update;

/// Apply every message of a command, collecting the resulting side effects
pub fn dispatch_command(model: &mut AppModel, command: Command) -> Option<Cmd> {
    let cmds: Vec<Cmd> = command
        .to_msgs()
        .into_iter()
        .filter_map(|msg| update(model, msg))
        .collect();

    match cmds.len() {
        0 => None,
        1 => cmds.into_iter().next(),
        _ => Some(Cmd::batch(cmds)),
    }
}

/// Handle one key press
pub fn handle_key(model: &mut AppModel, keymap: &Keymap, event: &KeyEvent) -> Option<Cmd> {
    if let Some(command) = keystroke_from_crossterm(event).and_then(|k| keymap.lookup(&k)) {
        tracing::trace!("Key {:?} -> {}", event.code, command.display_name());
        return dispatch_command(model, command);
    }

    let ch = typed_char(event)?;
    update(model, Msg::Grid(GridMsg::TypeChar(ch)))
}
