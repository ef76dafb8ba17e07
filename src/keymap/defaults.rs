//! Default keybindings
//!
//! The shipped keymap lives in keymap.yaml at the project root and is embedded
//! at compile time. `default_bindings` mirrors it for when parsing fails.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};
use crate::config_paths;

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap source
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. keymap.yaml in current directory (project-local overrides)
/// 3. User config at ~/.config/costgrid/keymap.yaml
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Ok(local_bindings) = load_keymap_file(Path::new("keymap.yaml")) {
        tracing::info!(
            "Merging project keymap.yaml ({} bindings)",
            local_bindings.len()
        );
        bindings = merge_bindings(bindings, local_bindings);
    }

    if let Some(user_path) = config_paths::keymap_file() {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings = merge_bindings(bindings, user_bindings);
                }
                Err(e) => {
                    tracing::warn!("Failed to load user keymap from {}: {}", user_path.display(), e);
                }
            }
        }
    }

    bindings
}

/// Merge override bindings into base bindings
///
/// - Same keystroke replaces the base binding
/// - `Unbound` removes base bindings for that keystroke
/// - Anything else is appended
pub fn merge_bindings(base: Vec<Keybinding>, overrides: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for binding in overrides {
        if binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != binding.keystroke);
            continue;
        }

        match result.iter().position(|b| b.keystroke == binding.keystroke) {
            Some(idx) => result[idx] = binding,
            None => result.push(binding),
        }
    }

    result
}

/// Hardcoded copy of the shipped keymap
pub fn default_bindings() -> Vec<Keybinding> {
    let ctrl = Modifiers::CTRL;
    let none = Modifiers::NONE;

    vec![
        // History
        bind(KeyCode::Char('z'), ctrl, Command::Undo),
        bind(KeyCode::Char('y'), ctrl, Command::Redo),
        bind(KeyCode::Char('z'), ctrl | Modifiers::SHIFT, Command::Redo),
        // Clipboard
        bind(KeyCode::Char('c'), ctrl, Command::Copy),
        bind(KeyCode::Char('v'), ctrl, Command::Paste),
        bind(KeyCode::Delete, none, Command::DeleteSelection),
        // Remote
        bind(KeyCode::Char('s'), ctrl, Command::SaveAll),
        bind(KeyCode::Char('n'), ctrl, Command::CreateRow),
        bind(KeyCode::Char('u'), ctrl, Command::UpdateRow),
        bind(KeyCode::Char('d'), ctrl, Command::DeleteRow),
        bind(KeyCode::Char('r'), ctrl, Command::Refresh),
        bind(KeyCode::F(5), none, Command::Refresh),
        // App
        bind(KeyCode::Char('q'), ctrl, Command::Quit),
        // Focus movement
        bind(KeyCode::Up, none, Command::MoveUp),
        bind(KeyCode::Down, none, Command::MoveDown),
        bind(KeyCode::Left, none, Command::MoveLeft),
        bind(KeyCode::Right, none, Command::MoveRight),
        bind(KeyCode::Tab, none, Command::NextCell),
        bind(KeyCode::Tab, Modifiers::SHIFT, Command::PrevCell),
        bind(KeyCode::Home, none, Command::RowStart),
        bind(KeyCode::End, none, Command::RowEnd),
        bind(KeyCode::Home, ctrl, Command::FirstCell),
        bind(KeyCode::End, ctrl, Command::LastCell),
        bind(KeyCode::PageUp, none, Command::PageUp),
        bind(KeyCode::PageDown, none, Command::PageDown),
        // Cell editing
        bind(KeyCode::Enter, none, Command::Enter),
        bind(KeyCode::Backspace, none, Command::Backspace),
        bind(KeyCode::Escape, none, Command::CancelEdit),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl_s() -> Keystroke {
        Keystroke::new(KeyCode::Char('s'), Modifiers::CTRL)
    }

    fn ctrl_z() -> Keystroke {
        Keystroke::new(KeyCode::Char('z'), Modifiers::CTRL)
    }

    #[test]
    fn test_has_save_binding() {
        let bindings = default_bindings();
        assert!(bindings
            .iter()
            .any(|b| b.keystroke == ctrl_s() && b.command == Command::SaveAll));
    }

    #[test]
    fn test_merge_empty_overrides_returns_base() {
        let base = default_bindings();
        let merged = merge_bindings(base.clone(), vec![]);
        assert_eq!(merged, base);
    }

    #[test]
    fn test_merge_adds_new_binding() {
        let base = vec![Keybinding::new(ctrl_s(), Command::SaveAll)];
        let merged = merge_bindings(base, vec![Keybinding::new(ctrl_z(), Command::Undo)]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_overrides_existing() {
        let base = vec![Keybinding::new(ctrl_s(), Command::SaveAll)];
        let merged = merge_bindings(base, vec![Keybinding::new(ctrl_s(), Command::Refresh)]);
        assert_eq!(merged, vec![Keybinding::new(ctrl_s(), Command::Refresh)]);
    }

    #[test]
    fn test_merge_unbound_removes_binding() {
        let base = vec![
            Keybinding::new(ctrl_s(), Command::SaveAll),
            Keybinding::new(ctrl_z(), Command::Undo),
        ];
        let merged = merge_bindings(base, vec![Keybinding::new(ctrl_s(), Command::Unbound)]);
        assert_eq!(merged, vec![Keybinding::new(ctrl_z(), Command::Undo)]);
    }

    #[test]
    fn test_merge_unbound_on_nonexistent_is_noop() {
        let base = vec![Keybinding::new(ctrl_z(), Command::Undo)];
        let merged = merge_bindings(
            base.clone(),
            vec![Keybinding::new(ctrl_s(), Command::Unbound)],
        );
        assert_eq!(merged, base);
    }
}
