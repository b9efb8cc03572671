//! Input handling for the interactive player.
//!
//! Dispatches terminal events to the appropriate handler and returns a
//! control flow signal for the main loop.

mod keyboard;

pub use keyboard::handle_key_event;

use crossterm::event::Event;

use crate::player::state::{InputResult, PlayerState};

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(event: Event, state: &mut PlayerState) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, state),
        Event::Resize(_, _) => {
            state.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore mouse, focus and paste events
    }
}
