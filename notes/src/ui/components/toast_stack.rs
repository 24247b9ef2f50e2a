//! Toast overlay, drawn last so it sits above every screen.

use ratatui::prelude::Rect;
use ratatui::{
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::toast_queue::ToastQueue;
use crate::ui::{layouts, theme};

pub fn render_toasts(f: &mut Frame, area: Rect, toasts: &ToastQueue) {
    for (index, toast) in toasts.visible().enumerate() {
        let Some(slot) = u16::try_from(index)
            .ok()
            .and_then(|index| layouts::toast_slot(index, area))
        else {
            break;
        };

        let color = theme::toast_color(toast.notification.severity);
        let paragraph = Paragraph::new(toast.notification.message.as_str())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        f.render_widget(Clear, slot);
        f.render_widget(paragraph, slot);
    }
}
