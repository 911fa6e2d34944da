//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use battle_core::Key;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Throw the current battle away and start a new one.
    Restart,
    /// Forward a logical key to the battle.
    Battle(Key),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into battle keys and application commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Up => KeyAction::Battle(Key::Up),
            KeyCode::Down => KeyAction::Battle(Key::Down),
            KeyCode::Enter => KeyAction::Battle(Key::Confirm),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => KeyAction::Quit,
            'r' => KeyAction::Restart,
            'k' | 'w' => KeyAction::Battle(Key::Up),
            'j' | 's' => KeyAction::Battle(Key::Down),
            'z' | ' ' => KeyAction::Battle(Key::Confirm),
            _ => KeyAction::None,
        }
    }
}
