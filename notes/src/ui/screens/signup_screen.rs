use ratatui::{
    layout::{Constraint, Layout},
    prelude::*,
    widgets::Paragraph,
};

use crate::state::{SignupField, SignupFormState};
use crate::ui::{
    components::{form_error, help_bar, loading_indicator, text_field},
    layouts, theme,
};

/// Name + email + password + error line + link line
const FORM_HEIGHT: u16 = theme::INPUT_HEIGHT * 3 + 2;

pub fn render(f: &mut Frame, form: &SignupFormState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let (text_area, indicator_area) = layouts::title_with_loading(title_area);
    f.render_widget(
        Paragraph::new("Sign Up").style(theme::title_style()),
        text_area,
    );
    loading_indicator::render_loading_indicator(f, indicator_area, &form.phase);

    let form_area = layouts::centered_box(theme::FORM_WIDTH, FORM_HEIGHT, content_area);
    let [name_area, email_area, password_area, error_area, link_area] = Layout::vertical([
        Constraint::Length(theme::INPUT_HEIGHT),
        Constraint::Length(theme::INPUT_HEIGHT),
        Constraint::Length(theme::INPUT_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(form_area);

    text_field::render_text_field(
        f,
        name_area,
        "Name",
        &form.name,
        form.focus == SignupField::Name,
    );
    text_field::render_text_field(
        f,
        email_area,
        "Email",
        &form.email,
        form.focus == SignupField::Email,
    );
    text_field::render_text_field(
        f,
        password_area,
        "Password",
        &form.password.display(),
        form.focus == SignupField::Password,
    );
    form_error::render_form_error(f, error_area, form.error.as_deref());

    let link = Paragraph::new("Already have an account? Login (Ctrl+N)")
        .style(theme::help_text_style())
        .alignment(Alignment::Center);
    f.render_widget(link, link_area);

    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_SIGNUP);
}
