//! Title and footer lines for the player.

use ratatui::text::{Line, Span};

use crate::player::state::PlayerState;
use crate::tui::Theme;

/// Keybinding hints shown in the footer.
pub const FOOTER_KEYS: &[(&str, &str)] = &[
    ("←", "prev"),
    ("→", "next"),
    ("r", "reset"),
    ("?", "help"),
    ("q", "quit"),
];

/// "step k/N" progress text.
pub fn progress_text(state: &PlayerState) -> String {
    format!("step {}/{}", state.cursor.position(), state.cursor.len())
}

/// Title line: pivot strategy and the values being sorted.
pub fn build_title_line(state: &PlayerState, theme: &Theme) -> Line<'static> {
    let input = state
        .input
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Line::from(vec![
        Span::styled(" qstep ".to_string(), theme.accent_bold_style()),
        Span::styled("│ pivot: ".to_string(), theme.text_secondary_style()),
        Span::styled(state.pivot.to_string(), theme.text_style()),
        Span::styled(" │ input: ".to_string(), theme.text_secondary_style()),
        Span::styled(format!("[{input}]"), theme.text_style()),
    ])
}

/// Footer line: progress on the left, then key hints joined by " | ".
pub fn build_footer_line(state: &PlayerState, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(FOOTER_KEYS.len() * 3 + 2);
    spans.push(Span::styled(
        format!(" {} ", progress_text(state)),
        theme.text_style(),
    ));
    spans.push(Span::styled("│ ".to_string(), theme.text_secondary_style()));
    for (i, (key, desc)) in FOOTER_KEYS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ".to_string(), theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_bold_style()));
        spans.push(Span::styled(format!(": {desc}"), theme.text_secondary_style()));
    }
    Line::from(spans)
}
