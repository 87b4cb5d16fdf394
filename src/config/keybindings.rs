//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default arrow and vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Card navigation
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('p')] {
            bindings.insert(KeyEvent::new(code, KeyModifiers::NONE), KeyAction::PrevCard);
        }
        for code in [KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('n')] {
            bindings.insert(KeyEvent::new(code, KeyModifiers::NONE), KeyAction::NextCard);
        }
        for code in [KeyCode::Char(' '), KeyCode::Enter, KeyCode::Char('f')] {
            bindings.insert(KeyEvent::new(code, KeyModifiers::NONE), KeyAction::Flip);
        }

        // Category filter
        bindings.insert(
            KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE),
            KeyAction::SelectAll,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
            KeyAction::SelectAll,
        );
        for (n, ch) in ('1'..='9').enumerate() {
            bindings.insert(
                KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE),
                KeyAction::SelectCategory(n + 1),
            );
        }
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::NextCategory,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevCategory,
        );

        // Help overlay scrolling
        for code in [KeyCode::Up, KeyCode::Char('k')] {
            bindings.insert(KeyEvent::new(code, KeyModifiers::NONE), KeyAction::ScrollUp);
        }
        for code in [KeyCode::Down, KeyCode::Char('j')] {
            bindings.insert(KeyEvent::new(code, KeyModifiers::NONE), KeyAction::ScrollDown);
        }

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        // Some terminals report '?' with SHIFT held
        for mods in [KeyModifiers::NONE, KeyModifiers::SHIFT] {
            bindings.insert(KeyEvent::new(KeyCode::Char('?'), mods), KeyAction::Help);
        }

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_map_to_card_navigation() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Left)), Some(KeyAction::PrevCard));
        assert_eq!(bindings.get(key(KeyCode::Right)), Some(KeyAction::NextCard));
    }

    #[test]
    fn vim_keys_map_to_card_navigation() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('h'))), Some(KeyAction::PrevCard));
        assert_eq!(bindings.get(key(KeyCode::Char('l'))), Some(KeyAction::NextCard));
    }

    #[test]
    fn space_and_enter_flip() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char(' '))), Some(KeyAction::Flip));
        assert_eq!(bindings.get(key(KeyCode::Enter)), Some(KeyAction::Flip));
    }

    #[test]
    fn digits_select_categories() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('0'))), Some(KeyAction::SelectAll));
        assert_eq!(
            bindings.get(key(KeyCode::Char('1'))),
            Some(KeyAction::SelectCategory(1))
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('9'))),
            Some(KeyAction::SelectCategory(9))
        );
    }

    #[test]
    fn tab_and_backtab_cycle_categories() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Tab)), Some(KeyAction::NextCategory));
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(KeyAction::PrevCategory)
        );
    }

    #[test]
    fn unbound_key_returns_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('z'))), None);
    }
}
