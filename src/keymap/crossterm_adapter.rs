//! Adapter to convert crossterm key events to our Keystroke type

use crossterm::event::{KeyCode as CtKeyCode, KeyEvent, KeyModifiers};

use super::types::{KeyCode, Keystroke, Modifiers};

/// Convert a crossterm key event to our Keystroke type
///
/// Returns None if the key cannot be mapped (media keys, lone modifiers).
pub fn keystroke_from_crossterm(event: &KeyEvent) -> Option<Keystroke> {
    let mut mods = Modifiers::new(
        event.modifiers.contains(KeyModifiers::CONTROL),
        event.modifiers.contains(KeyModifiers::SHIFT),
        event.modifiers.contains(KeyModifiers::ALT),
    );

    let key = match event.code {
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Esc => KeyCode::Escape,
        CtKeyCode::Tab => KeyCode::Tab,
        // Terminals report Shift+Tab as its own key
        CtKeyCode::BackTab => {
            mods = mods | Modifiers::SHIFT;
            KeyCode::Tab
        }
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Delete => KeyCode::Delete,

        CtKeyCode::Up => KeyCode::Up,
        CtKeyCode::Down => KeyCode::Down,
        CtKeyCode::Left => KeyCode::Left,
        CtKeyCode::Right => KeyCode::Right,

        CtKeyCode::Home => KeyCode::Home,
        CtKeyCode::End => KeyCode::End,
        CtKeyCode::PageUp => KeyCode::PageUp,
        CtKeyCode::PageDown => KeyCode::PageDown,
        CtKeyCode::Insert => KeyCode::Insert,

        CtKeyCode::F(n) => KeyCode::F(n),

        CtKeyCode::Char(' ') => KeyCode::Space,
        CtKeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),

        _ => return None,
    };

    Some(Keystroke::new(key, mods))
}

/// The character a key event would type into a cell, if any
///
/// Case is preserved; Ctrl and Alt chords never type.
pub fn typed_char(event: &KeyEvent) -> Option<char> {
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match event.code {
        CtKeyCode::Char(c) if !c.is_control() => Some(c),
        _ => None,
    }
}
