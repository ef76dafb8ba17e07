//! Keybinding struct linking a keystroke to a command

use super::command::Command;
use super::types::Keystroke;

/// A keybinding maps a keystroke to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }

    pub fn matches(&self, keystroke: &Keystroke) -> bool {
        self.keystroke == *keystroke
    }

    /// Format for display (e.g., "Ctrl+S")
    pub fn display_string(&self) -> String {
        self.keystroke.display_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    #[test]
    fn test_binding_matches() {
        let stroke = Keystroke::new(KeyCode::Char('s'), Modifiers::CTRL);
        let binding = Keybinding::new(stroke, Command::SaveAll);

        assert!(binding.matches(&stroke));
        assert!(!binding.matches(&Keystroke::char('s')));
        assert_eq!(binding.display_string(), "Ctrl+S");
    }
}
