//! Help overlay for the player.
//!
//! Draws a centered box listing every keyboard shortcut.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::ui::centered_rect;
use crate::tui::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  Navigation",
    "    → / l / n / Space   Next step",
    "    ← / h / p           Previous step",
    "    r / Home            Reset to the start",
    "",
    "  Bars",
    "    p   pivot",
    "    i   last element known to be < pivot",
    "    j   element being compared",
    "",
    "  General",
    "    ?          Show this help",
    "    q / Esc    Quit player",
    "",
    "        Press any key to close",
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 48;

/// Render the help overlay on top of whatever is in `area`.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let height = HELP_LINES.len() as u16 + 2;
    let popup = centered_rect(HELP_BOX_WIDTH, height, area);

    let lines: Vec<Line<'static>> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    let help = Paragraph::new(lines).style(theme.text_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_bold_style())
            .title(" qstep help "),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}
