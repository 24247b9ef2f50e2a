//! Shared help bar component for consistent bottom navigation hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render a standard help bar with the given text.
///
/// The help bar is styled consistently with gray text in a bordered block,
/// centered alignment. All screens should use this for their help bar.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_LOGIN: &str =
    "Tab: next field | Enter: login | Ctrl+T: show/hide password | Ctrl+N: sign up | Ctrl+C: quit";

pub const HELP_TEXT_SIGNUP: &str =
    "Tab: next field | Enter: sign up | Ctrl+T: show/hide password | Ctrl+N: login | Ctrl+C: quit";

pub const HELP_TEXT_HOME: &str = "o: sign out | q: quit";
