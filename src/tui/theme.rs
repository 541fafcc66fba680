// src/tui/theme.rs — Color scheme and style definitions for the chat TUI.

use ratatui::style::{Color, Modifier, Style};

/// Paper-and-ink palette.
pub struct Theme;

impl Theme {
    // ── Palette ──────────────────────────────────────────────────
    pub const INK_TEAL: Color = Color::Rgb(60, 170, 170);
    pub const INK_WHITE: Color = Color::Rgb(235, 235, 230);
    pub const INK_BLUE: Color = Color::Rgb(90, 140, 220);
    pub const INK_GREEN: Color = Color::Rgb(90, 195, 125);
    pub const INK_RED: Color = Color::Rgb(225, 85, 85);
    pub const INK_YELLOW: Color = Color::Rgb(225, 195, 70);
    pub const INK_GRAY: Color = Color::Rgb(125, 125, 140);
    pub const INK_DIM: Color = Color::Rgb(85, 85, 100);

    // ── Semantic styles ──────────────────────────────────────────

    /// Main title / header bar.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::INK_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    /// Active/selected tab header.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::INK_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab header.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::INK_GRAY)
    }

    /// Block border (normal).
    pub fn border() -> Style {
        Style::default().fg(Theme::INK_DIM)
    }

    /// Block border (focused input).
    pub fn border_focus() -> Style {
        Style::default().fg(Theme::INK_TEAL)
    }

    /// Normal body text.
    pub fn text() -> Style {
        Style::default().fg(Theme::INK_WHITE)
    }

    /// Dimmed / secondary text.
    pub fn text_dim() -> Style {
        Style::default().fg(Theme::INK_GRAY)
    }

    /// The user's chat messages.
    pub fn speaker_user() -> Style {
        Style::default()
            .fg(Theme::INK_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    /// The assistant's chat messages.
    pub fn speaker_assistant() -> Style {
        Style::default()
            .fg(Theme::INK_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    /// Informational notice.
    pub fn info() -> Style {
        Style::default().fg(Theme::INK_GREEN)
    }

    /// Warning notice.
    pub fn warning() -> Style {
        Style::default().fg(Theme::INK_YELLOW)
    }

    /// Error notice.
    pub fn error() -> Style {
        Style::default().fg(Theme::INK_RED)
    }

    /// Busy indicator while a request is in flight.
    pub fn busy() -> Style {
        Style::default()
            .fg(Theme::INK_YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    /// Key name in the footer hints.
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Theme::INK_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    /// Key description in the footer hints.
    pub fn key_desc() -> Style {
        Style::default().fg(Theme::INK_GRAY)
    }
}
