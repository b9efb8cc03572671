//! Keyboard input handling for the interactive player.
//!
//! Maps keys onto cursor navigation, help toggling and quitting.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::state::{InputResult, PlayerState};

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut PlayerState) -> InputResult {
    // Windows reports both press and release
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if state.show_help {
        state.toggle_help();
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Navigation ===
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Char(' ') => {
            state.next_step();
            InputResult::Continue
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
            state.previous_step();
            InputResult::Continue
        }
        KeyCode::Home | KeyCode::Char('r') => {
            state.reset();
            InputResult::Continue
        }

        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
