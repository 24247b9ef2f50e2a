//! Centralized theme constants and style functions for consistent UI styling.
//!
//! All colors, layout constants, and common styles should be defined here
//! to ensure visual consistency across all screens and components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Color for success toasts and confirmations
pub const COLOR_SUCCESS: Color = Color::Green;

/// Color for error toasts and form errors
pub const COLOR_ERROR: Color = Color::Red;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Border color for the focused input field
pub const COLOR_INPUT_FOCUSED: Color = Color::Yellow;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 2;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Height of a bordered single-line input
pub const INPUT_HEIGHT: u16 = 3;

/// Width of the centered auth form
pub const FORM_WIDTH: u16 = 50;

/// Width of the toast column
pub const TOAST_WIDTH: u16 = 40;

/// Height of one toast
pub const TOAST_HEIGHT: u16 = 3;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for screen titles
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for loading/status messages
pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

/// Border style for the focused input
pub fn input_focused_border_style() -> Style {
    Style::default()
        .fg(COLOR_INPUT_FOCUSED)
        .add_modifier(Modifier::BOLD)
}

/// Style for input text
pub fn input_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for inline form errors
pub fn error_style() -> Style {
    Style::default()
        .fg(COLOR_ERROR)
        .add_modifier(Modifier::BOLD)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

/// Border color for a toast of the given severity
pub fn toast_color(severity: notes_auth::Severity) -> Color {
    match severity {
        notes_auth::Severity::Success => COLOR_SUCCESS,
        notes_auth::Severity::Error => COLOR_ERROR,
    }
}
