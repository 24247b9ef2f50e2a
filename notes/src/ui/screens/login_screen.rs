use ratatui::{
    layout::{Constraint, Layout},
    prelude::*,
    widgets::Paragraph,
};

use crate::state::{LoginField, LoginFormState};
use crate::ui::{
    components::{form_error, help_bar, loading_indicator, text_field},
    layouts, theme,
};

/// Email + password + error line + link line
const FORM_HEIGHT: u16 = theme::INPUT_HEIGHT * 2 + 2;

pub fn render(f: &mut Frame, form: &LoginFormState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let (text_area, indicator_area) = layouts::title_with_loading(title_area);
    f.render_widget(Paragraph::new("Login").style(theme::title_style()), text_area);
    loading_indicator::render_loading_indicator(f, indicator_area, &form.phase);

    let form_area = layouts::centered_box(theme::FORM_WIDTH, FORM_HEIGHT, content_area);
    let [email_area, password_area, error_area, link_area] = Layout::vertical([
        Constraint::Length(theme::INPUT_HEIGHT),
        Constraint::Length(theme::INPUT_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(form_area);

    text_field::render_text_field(
        f,
        email_area,
        "Email",
        &form.email,
        form.focus == LoginField::Email,
    );
    text_field::render_text_field(
        f,
        password_area,
        "Password",
        &form.password.display(),
        form.focus == LoginField::Password,
    );
    form_error::render_form_error(f, error_area, form.error.as_deref());

    let link = Paragraph::new("Don't have an account? Sign Up (Ctrl+N)")
        .style(theme::help_text_style())
        .alignment(Alignment::Center);
    f.render_widget(link, link_area);

    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_LOGIN);
}
