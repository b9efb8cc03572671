//! Rendering components for the player.
//!
//! This module contains the frame layout for the interactive player
//! (title, bar chart, step message, footer, help overlay) and the plain
//! text renderer used for non-interactive output.

mod bars;
mod help;
mod status;
mod text;

pub use bars::{bar_color, bar_heights, bar_width, render_bars};
pub use help::{render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use status::{build_footer_line, build_title_line, progress_text, FOOTER_KEYS};
pub use text::{pointer_label, render_step_text};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::player::state::PlayerState;
use crate::tui::Theme;

/// Draw the whole player screen for the current state.
pub fn render_frame(frame: &mut Frame, state: &PlayerState, theme: &Theme) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(5),    // bars
            Constraint::Length(2), // step message
            Constraint::Length(1), // footer
        ])
        .split(area);

    frame.render_widget(Paragraph::new(build_title_line(state, theme)), chunks[0]);
    render_bars(
        frame,
        chunks[1],
        state.visible_array(),
        state.current_step(),
        theme,
    );
    frame.render_widget(
        Paragraph::new(format!(" {}", state.status))
            .style(theme.text_style())
            .wrap(Wrap { trim: false }),
        chunks[2],
    );
    frame.render_widget(Paragraph::new(build_footer_line(state, theme)), chunks[3]);

    if state.show_help {
        render_help(frame, area, theme);
    }
}
