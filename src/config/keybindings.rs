//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::model::SortPreference;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Printable characters without Ctrl/Alt fall through to text input, so
/// bindings only cover control and navigation keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the bound action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bound action, or text input for an unbound printable character.
    pub fn resolve(&self, key: KeyEvent) -> Option<KeyAction> {
        if let Some(action) = self.get(key) {
            return Some(action);
        }
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(KeyAction::InsertChar(ch))
            }
            _ => None,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Input editing
        bind(KeyCode::Backspace, KeyModifiers::NONE, KeyAction::DeleteBack);
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::CursorLeft);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::CursorRight);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::CursorHome);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::CursorEnd);
        bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::ClearInput);

        // Tabs
        bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::NextTab);
        bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevTab);
        bind(KeyCode::BackTab, KeyModifiers::NONE, KeyAction::PrevTab);

        // Sort
        bind(
            KeyCode::Char('p'),
            KeyModifiers::CONTROL,
            KeyAction::SelectSort(SortPreference::Popular),
        );
        bind(
            KeyCode::Char('r'),
            KeyModifiers::CONTROL,
            KeyAction::SelectSort(SortPreference::Recent),
        );

        // Application
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_char_resolves_to_insert() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.resolve(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(KeyAction::InsertChar('q'))
        );
    }

    #[test]
    fn shifted_char_resolves_to_insert() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.resolve(key(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(KeyAction::InsertChar('Q'))
        );
    }

    #[test]
    fn unbound_control_char_resolves_to_nothing() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.resolve(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.resolve(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            bindings.resolve(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn sort_keys_select_preferences() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            Some(KeyAction::SelectSort(SortPreference::Popular))
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(KeyAction::SelectSort(SortPreference::Recent))
        );
    }

    #[test]
    fn tab_and_backtab_cycle_modes() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(KeyAction::NextTab)
        );
        assert_eq!(
            bindings.get(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(KeyAction::PrevTab)
        );
    }
}
