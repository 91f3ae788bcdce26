//! TUI Theme
//!
//! Dark palette with cyan accents for the assistant and blue for the user.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent color - cyan
pub const ACCENT: Color = Color::Rgb(34, 211, 238);

/// User bubble color - blue
pub const USER: Color = Color::Rgb(96, 165, 250);

/// Spinner and "thinking" text
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Banners and the quit hint
pub const ERROR: Color = Color::Rgb(239, 68, 68);

/// Placeholders, footer and code headers
pub const MUTED: Color = Color::Rgb(156, 163, 175);

/// Inactive borders
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Code block background
pub const CODE_BG: Color = Color::Rgb(24, 24, 27);

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Model prose and typed input
pub fn text() -> Style {
    Style::default().fg(Color::Rgb(229, 231, 235))
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Input box border while it accepts keys
pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// Placeholder and disabled input
pub fn placeholder() -> Style {
    Style::default().fg(MUTED)
}

/// User bubble label
pub fn user_label() -> Style {
    Style::default().fg(USER).add_modifier(Modifier::BOLD)
}

/// User bubble text
pub fn user_text() -> Style {
    Style::default().fg(Color::White)
}

/// Assistant bubble label
pub fn model_label() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Language header above a code block
pub fn code_header() -> Style {
    Style::default()
        .fg(MUTED)
        .bg(Color::Rgb(31, 41, 55))
        .add_modifier(Modifier::ITALIC)
}

/// Code block body
pub fn code() -> Style {
    Style::default().fg(Color::Rgb(190, 242, 100)).bg(CODE_BG)
}

/// Error banner
pub fn error() -> Style {
    Style::default().fg(ERROR)
}

pub fn key_hint() -> Style {
    Style::default().fg(ACCENT)
}

pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}
