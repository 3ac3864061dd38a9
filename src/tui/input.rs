//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::AppState;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Sample the meters right now.
    Refresh,
}

/// Handles a key press, updating `state` and returning what the app loop
/// should do next.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('m') => {
            state.cycle_modes();
            KeyAction::None
        }
        KeyCode::Char('p') => {
            state.toggle_pause();
            KeyAction::None
        }
        KeyCode::Char(' ') => KeyAction::Refresh,
        _ => KeyAction::None,
    }
}
