use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use serde_json::Value;

use notes_auth::{AuthResponse, SessionState};

use crate::ui::{components::help_bar, layouts, theme};

const REDACTED: &str = "********";

pub fn render(f: &mut Frame, session: &SessionState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    f.render_widget(
        Paragraph::new("Notes").style(theme::title_style()),
        title_area,
    );

    let lines = match session {
        SessionState::Authenticated(response) => {
            let mut lines = vec![
                Line::from(Span::styled("Signed in", theme::title_style())),
                Line::from(""),
            ];
            lines.extend(session_fields(response).into_iter().map(|(key, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", key), theme::help_text_style()),
                    Span::raw(value),
                ])
            }));
            lines
        }
        other => vec![Line::from(Span::styled(
            format!("Not signed in ({})", other.name()),
            theme::loading_style(),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::accent_border_style())
            .title("Session"),
    );
    f.render_widget(paragraph, content_area);

    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_HOME);
}

/// Session payload as display rows, credentials redacted
fn session_fields(response: &AuthResponse) -> Vec<(String, String)> {
    response
        .session
        .iter()
        .map(|(key, value)| {
            let shown = if is_credential(key) {
                REDACTED.to_string()
            } else {
                match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                }
            };
            (key.clone(), shown)
        })
        .collect()
}

fn is_credential(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key.contains("token") || key.contains("secret") || key.contains("password")
}
