//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the player) and ANSI escape codes
//! (for plain CLI output).

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Named themes selectable from the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Classic,
    Ocean,
}

/// Theme configuration.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and key hints
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Plain bars
    pub bar: Color,
    /// Bar holding the pivot
    pub pivot: Color,
    /// Bar under the `i` cursor
    pub i_pointer: Color,
    /// Bar under the `j` cursor
    pub j_pointer: Color,
    /// Bars involved in a comparison
    pub comparing: Color,
    /// Bars while a swap is pending
    pub swapping: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::standard(),
            ThemeName::Classic => Self::classic(),
            ThemeName::Ocean => Self::ocean(),
        }
    }

    /// Light gray text with green accents.
    /// Uses standard ANSI colors for consistent terminal rendering.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            error: Color::Red,
            success: Color::Green,
            bar: Color::Blue,
            pivot: Color::Red,
            i_pointer: Color::Yellow,
            j_pointer: Color::Magenta,
            comparing: Color::LightYellow,
            swapping: Color::LightRed,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            bar: Color::White,
            pivot: Color::Red,
            i_pointer: Color::Green,
            j_pointer: Color::Cyan,
            comparing: Color::Yellow,
            swapping: Color::LightRed,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            error: Color::Red,
            success: Color::Green,
            bar: Color::Cyan,
            pivot: Color::LightMagenta,
            i_pointer: Color::LightGreen,
            j_pointer: Color::LightBlue,
            comparing: Color::LightYellow,
            swapping: Color::LightRed,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI escape sequences for ad-hoc CLI coloring.
pub mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

/// Wrap `text` in the color's escape codes unless `NO_COLOR` is set.
fn paint(color: Color, text: &str) -> String {
    if colors_disabled() {
        return text.to_string();
    }
    format!("{}{}{}", color_to_ansi(color), text, ansi::RESET)
}

/// Honors https://no-color.org
pub fn colors_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to no color
        _ => "",
    }
}
