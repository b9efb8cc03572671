//! Player state management
//!
//! Contains the central `PlayerState` struct that holds everything the
//! interactive player needs between input events.

use crate::player::cursor::PlaybackCursor;
use crate::trace::{PivotStrategy, Step, StepSequence};

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the player
    Quit,
}

/// Central state for the interactive player.
#[derive(Debug)]
pub struct PlayerState {
    /// Navigation over the precomputed trace
    pub cursor: PlaybackCursor,
    /// Values the trace was generated from (shown before the first step)
    pub input: Vec<i64>,
    /// Strategy the trace was generated with
    pub pivot: PivotStrategy,
    /// Status line text
    pub status: String,
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    pub const STARTED: &'static str = "Sorting started! Press → to step forward.";
    pub const RESET: &'static str = "Reset complete. Ready to sort!";

    pub fn new(steps: StepSequence, input: Vec<i64>, pivot: PivotStrategy) -> Self {
        Self {
            cursor: PlaybackCursor::new(steps),
            input,
            pivot,
            status: Self::STARTED.to_string(),
            show_help: false,
            needs_render: true,
        }
    }

    /// Step currently on screen, if any.
    pub fn current_step(&self) -> Option<&Step> {
        self.cursor.current()
    }

    /// Array to draw: the current step's snapshot, or the raw input.
    pub fn visible_array(&self) -> &[i64] {
        self.current_step()
            .map_or(self.input.as_slice(), |step| step.array.as_slice())
    }

    pub fn next_step(&mut self) {
        self.status = match self.cursor.advance() {
            Ok(step) => step.message.clone(),
            Err(boundary) => boundary.to_string(),
        };
        self.needs_render = true;
    }

    pub fn previous_step(&mut self) {
        match self.cursor.retreat() {
            Ok(step) => self.status = step.message.clone(),
            // Keep showing the first step's message
            Err(_) => return,
        }
        self.needs_render = true;
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
        self.status = Self::RESET.to_string();
        self.needs_render = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}
