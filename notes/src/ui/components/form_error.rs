use ratatui::prelude::Rect;
use ratatui::{layout::Alignment, widgets::Paragraph, Frame};

use crate::ui::theme;

/// Inline error line under a form; renders nothing when there is no error
pub fn render_form_error(f: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(error) = error {
        let paragraph = Paragraph::new(error)
            .style(theme::error_style())
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}
