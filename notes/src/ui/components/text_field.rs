//! Single-line labelled input used by the auth forms.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Position,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render a bordered input with `label` as its title.
///
/// The focused field gets a highlighted border and the terminal cursor.
pub fn render_text_field(f: &mut Frame, area: Rect, label: &str, text: &str, focused: bool) {
    let mut block = Block::default().borders(Borders::ALL).title(label);
    if focused {
        block = block.border_style(theme::input_focused_border_style());
    }

    let input = Paragraph::new(text).style(theme::input_style()).block(block);
    f.render_widget(input, area);

    if focused {
        let text_width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let max_x = area.x + area.width.saturating_sub(2);
        f.set_cursor_position(Position::new(
            (area.x + 1).saturating_add(text_width).min(max_x),
            area.y + 1,
        ));
    }
}
