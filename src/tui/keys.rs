//! Keyboard event to action mapping.
//!
//! Converts crossterm KeyEvents into dashboard Actions and owns the help
//! entries shown in the status bar.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::action::Action;
use super::state::AppState;

/// Help entry for one interactive key, rendered in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: &'static str,
    pub label: &'static str,
}

pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('a') => Some(Action::ToggleOverlay),
        KeyCode::Right | KeyCode::Char('n') => Some(Action::NextMatchupView),
        KeyCode::Left | KeyCode::Char('p') => Some(Action::PrevMatchupView),
        _ => None,
    };

    if let Some(ref action) = action {
        debug!(
            "KEY: {:?} -> {:?} (overlay open: {})",
            key.code,
            action,
            state.overlay.is_open()
        );
    }
    action
}

/// Current help entries. The overlay label flips to match what pressing
/// the key would do next.
pub fn key_bindings(state: &AppState) -> Vec<KeyBinding> {
    vec![
        KeyBinding {
            key: "◂ ▸",
            label: "View",
        },
        KeyBinding {
            key: "a",
            label: if state.overlay.is_open() {
                "Close Stats"
            } else {
                "Advanced Stats"
            },
        },
        KeyBinding {
            key: "q",
            label: "Quit",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let state = AppState::default();
        assert!(matches!(
            key_to_action(press(KeyCode::Char('q')), &state),
            Some(Action::Quit)
        ));
        assert!(matches!(
            key_to_action(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &state
            ),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_view_cycle_keys() {
        let state = AppState::default();
        assert!(matches!(
            key_to_action(press(KeyCode::Right), &state),
            Some(Action::NextMatchupView)
        ));
        assert!(matches!(
            key_to_action(press(KeyCode::Char('n')), &state),
            Some(Action::NextMatchupView)
        ));
        assert!(matches!(
            key_to_action(press(KeyCode::Left), &state),
            Some(Action::PrevMatchupView)
        ));
        assert!(matches!(
            key_to_action(press(KeyCode::Char('p')), &state),
            Some(Action::PrevMatchupView)
        ));
    }

    #[test]
    fn test_overlay_toggle_key() {
        let state = AppState::default();
        assert!(matches!(
            key_to_action(press(KeyCode::Char('a')), &state),
            Some(Action::ToggleOverlay)
        ));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let state = AppState::default();
        assert!(key_to_action(press(KeyCode::Char('x')), &state).is_none());
        assert!(key_to_action(press(KeyCode::Enter), &state).is_none());
    }

    #[test]
    fn test_overlay_help_label_flips() {
        let closed = AppState::default();
        let labels: Vec<_> = key_bindings(&closed).iter().map(|b| b.label).collect();
        assert!(labels.contains(&"Advanced Stats"));

        let mut open = AppState::default();
        open.overlay = open.overlay.toggle();
        let labels: Vec<_> = key_bindings(&open).iter().map(|b| b.label).collect();
        assert!(labels.contains(&"Close Stats"));
    }
}
