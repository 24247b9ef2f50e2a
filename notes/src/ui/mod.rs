pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::state::AppState;
use crate::toast_queue::ToastQueue;
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, toasts: &ToastQueue) {
    match state.current_screen() {
        Screen::Login(form) => login_screen::render(f, form),
        Screen::Signup(form) => signup_screen::render(f, form),
        Screen::Home => home_screen::render(f, &state.session.state()),
    }

    // Toasts float above whatever screen is showing
    components::toast_stack::render_toasts(f, f.area(), toasts);
}
