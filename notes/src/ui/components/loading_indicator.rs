use ratatui::{layout::Rect, Frame};

use crate::state::FormPhase;

/// Render a spinner while the form waits for the server
pub fn render_loading_indicator(f: &mut Frame, area: Rect, phase: &FormPhase) {
    if let FormPhase::Submitting(_, throbber_state) = phase {
        let simple = throbber_widgets_tui::Throbber::default()
            .throbber_set(throbber_widgets_tui::BRAILLE_EIGHT);
        f.render_stateful_widget(simple, area, &mut throbber_state.clone());
    }
}
