//! Centralized theme and styling for the TUI
//!
//! Single source of truth for all colors and styles used by the screens.
//! Components should pull styles from here rather than hardcoding them.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary accent color - borders, titles, the big question text
    pub const PRIMARY: Color = Color::Red;

    /// Secondary accent color - selected answers
    pub const SECONDARY: Color = Color::LightRed;

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/exhausted answer color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Result name highlight
    pub const RESULT: Color = Color::Yellow;

    /// Status line warnings
    pub const WARNING: Color = Color::Yellow;
}

/// Pre-built styles for common UI elements
pub struct Styles;

impl Styles {
    /// The big question text
    pub fn question() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// A selectable answer
    pub fn answer() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// The currently selected answer
    pub fn answer_selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// An exhausted answer replaced by its explanatory message
    pub fn answer_exhausted() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    /// A presented result name
    pub fn result() -> Style {
        Style::default()
            .fg(Colors::RESULT)
            .add_modifier(Modifier::BOLD)
    }

    /// The progress line above a question
    pub fn progress() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Keybinding hints in the navigation bar
    pub fn nav_bar() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Status line messages
    pub fn status() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    /// Screen border
    pub fn border() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }
}
