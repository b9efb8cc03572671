//! Bar chart of the visible array.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::player::render::text::pointer_label;
use crate::trace::Step;
use crate::tui::Theme;

/// Gap between bars in columns.
const BAR_GAP: u16 = 1;

/// Color for the bar at `index` given the step on screen.
///
/// A pending swap tints the two bars being exchanged; a comparison tints
/// the scanned bar and the pivot. Otherwise pointers get their own color.
pub fn bar_color(step: Option<&Step>, index: usize, theme: &Theme) -> Color {
    let Some(step) = step else {
        return theme.bar;
    };
    let is_pivot = step.pivot_index == Some(index);
    let is_i = step.i_position() == Some(index);
    let is_j = step.j_index == Some(index);

    if step.swapping && (is_i || is_j) {
        theme.swapping
    } else if step.comparing && (is_j || is_pivot) {
        theme.comparing
    } else if is_pivot {
        theme.pivot
    } else if is_i {
        theme.i_pointer
    } else if is_j {
        theme.j_pointer
    } else {
        theme.bar
    }
}

/// Bar heights: values shifted so the smallest is 1 (negatives allowed).
pub fn bar_heights(values: &[i64]) -> Vec<u64> {
    let min = values.iter().copied().min().unwrap_or(0).min(1);
    values
        .iter()
        .map(|&v| u64::try_from(i128::from(v) - i128::from(min) + 1).unwrap_or(u64::MAX))
        .collect()
}

/// Width of each bar so `count` bars fill `available` columns.
pub fn bar_width(available: u16, count: usize) -> u16 {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    (available / count).saturating_sub(BAR_GAP).max(1)
}

/// Draw the bar chart for `values`, annotated from `step`.
pub fn render_bars(frame: &mut Frame, area: Rect, values: &[i64], step: Option<&Step>, theme: &Theme) {
    let heights = bar_heights(values);
    let bars: Vec<Bar<'_>> = values
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(index, (value, height))| {
            let color = bar_color(step, index, theme);
            let label = step.map_or("", |s| pointer_label(s, index));
            Bar::default()
                .value(height)
                .text_value(value.to_string())
                .label(Line::from(label))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style()),
        )
        .bar_width(bar_width(inner_width, values.len()))
        .bar_gap(BAR_GAP)
        .label_style(theme.accent_bold_style())
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
