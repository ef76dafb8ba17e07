//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone)]
pub struct Keymap {
    /// All registered bindings, in load order
    bindings: Vec<Keybinding>,
    /// Keystroke to index into `bindings`; later bindings win
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding; `Unbound` bindings are ignored
    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.command == Command::Unbound {
            return;
        }
        self.lookup.insert(binding.keystroke, self.bindings.len());
        self.bindings.push(binding);
    }

    /// Look up the command bound to a keystroke
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup
            .get(keystroke)
            .map(|&idx| self.bindings[idx].command)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// First binding for a command (the one shown in help text)
    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings.iter().find(|b| b.command == command)
    }

    /// Display string of the first binding for a command
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.binding_for(command).map(|b| b.display_string())
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::with_bindings(super::defaults::default_bindings())
    }
}
