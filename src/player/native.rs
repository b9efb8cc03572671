//! Interactive terminal loop.
//!
//! Owns the terminal for the lifetime of a session: raw mode and the
//! alternate screen are entered on start and always restored on exit.

use std::io::{self, Stdout};

use anyhow::{bail, Context, Result};
use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crate::player::cursor::PlaybackCursor;
use crate::player::input::handle_event;
use crate::player::render::render_frame;
use crate::player::state::{InputResult, PlayerState};
use crate::tui::Theme;

/// How a playback session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Steps shown when the user quit
    pub position: usize,
    /// Total steps in the trace
    pub total: usize,
    /// Whether the terminal step was reached
    pub finished: bool,
}

impl PlaybackSummary {
    pub fn from_cursor(cursor: &PlaybackCursor) -> Self {
        Self {
            position: cursor.position(),
            total: cursor.len(),
            finished: cursor.is_finished(),
        }
    }
}

/// Restores the terminal when dropped, even on early return or panic unwind.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the interactive player until the user quits.
///
/// # Errors
/// Fails when stdout is not an interactive terminal or terminal I/O fails.
pub fn play(mut state: PlayerState, theme: &Theme) -> Result<PlaybackSummary> {
    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("The player requires an interactive terminal; use `qstep trace` for plain output");
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard;
    execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let mut terminal: Terminal<CrosstermBackend<Stdout>> =
        Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    loop {
        if state.needs_render {
            terminal.draw(|frame| render_frame(frame, &state, theme))?;
            state.needs_render = false;
        }

        let event = event::read().context("Failed to read terminal event")?;
        if handle_event(event, &mut state) == InputResult::Quit {
            break;
        }
    }

    let summary = PlaybackSummary::from_cursor(&state.cursor);
    info!(
        position = summary.position,
        total = summary.total,
        finished = summary.finished,
        "player closed"
    );
    Ok(summary)
}
