//! Keyboard mapping for the terminal frontend.

use crate::game::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the terminal frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forwarded to the game core.
    Game(InputEvent),
    /// Frontend-local: show or hide hitboxes.
    ToggleHitboxes,
}

/// Map a key event; releases and unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(KeyAction::Game(InputEvent::Quit));
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => {
            Some(KeyAction::Game(InputEvent::Flap))
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(KeyAction::Game(InputEvent::Quit))
        }
        KeyCode::Char('d') | KeyCode::Char('D') => Some(KeyAction::ToggleHitboxes),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_flap_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Enter, KeyCode::Up] {
            assert_eq!(map_key(press(code)), Some(KeyAction::Game(InputEvent::Flap)));
        }
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')] {
            assert_eq!(map_key(press(code)), Some(KeyAction::Game(InputEvent::Quit)));
        }
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(KeyAction::Game(InputEvent::Quit)));
    }

    #[test]
    fn test_hitbox_toggle() {
        assert_eq!(map_key(press(KeyCode::Char('d'))), Some(KeyAction::ToggleHitboxes));
    }

    #[test]
    fn test_release_and_other_keys_ignored() {
        let mut release = press(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Down)), None);
    }
}
