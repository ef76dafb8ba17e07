//! Configurable keyboard mapping system
//!
//! This module provides a data-driven keybinding system that:
//! - Maps keystrokes to grid commands
//! - Enables user customization via YAML config files
//!
//! # Architecture
//!
//! ```text
//! crossterm::KeyEvent → Keystroke → Keymap::lookup() → Command → Vec<Msg>
//! ```
//!
//! Printable keys with no binding are typed into the focused cell by the
//! runtime (see `typed_char`).
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Embedded defaults merged with project and user overrides
//! let keymap = Keymap::with_bindings(load_default_keymap());
//!
//! // Or a single YAML file
//! let keymap = Keymap::with_bindings(load_keymap_file(path)?);
//! ```

mod binding;
mod command;
mod config;
mod crossterm_adapter;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use crossterm_adapter::{keystroke_from_crossterm, typed_char};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
