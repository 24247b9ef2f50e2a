use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    // Priority 0: Ctrl+C quits from anywhere
    if event.is_ctrl('c') {
        return Some(AppCommand::Quit);
    }

    match state.current_screen() {
        Screen::Login(_) | Screen::Signup(_) => handle_form_keys(event),
        Screen::Home => handle_home_keys(event),
    }
}

/// Keys on the login and signup forms
///
/// Every printable character goes into the focused field, so shortcuts need Ctrl.
fn handle_form_keys(event: KeyEvent) -> Option<AppCommand> {
    if event.modifiers.ctrl {
        return match event.key {
            // Show/hide password
            Key::Char('t') => Some(AppCommand::TogglePasswordMask),
            // "Sign Up" / "Login" link
            Key::Char('n') => Some(AppCommand::SwitchAuthScreen),
            // Clear current field
            Key::Char('l') => Some(AppCommand::ClearField),
            _ => None,
        };
    }

    match event.key {
        Key::Enter => Some(AppCommand::SubmitForm),
        Key::Tab | Key::Down => Some(AppCommand::FocusField { forward: true }),
        Key::BackTab | Key::Up => Some(AppCommand::FocusField { forward: false }),
        Key::Backspace => Some(AppCommand::DeleteChar),
        Key::Char(c) => Some(AppCommand::AppendChar(c)),
        Key::Esc | Key::Other => None,
    }
}

fn handle_home_keys(event: KeyEvent) -> Option<AppCommand> {
    match event.key {
        Key::Char('o') => Some(AppCommand::SignOut),
        Key::Char('q') | Key::Esc => Some(AppCommand::Quit),
        _ => None,
    }
}
