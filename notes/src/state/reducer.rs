use super::{AppState, LoginFormState};
use crate::events::{DataEvent, RequestId};
use crate::ui::screens::Screen;
use notes_auth::NotificationSink;

pub const LOGIN_SUCCESS: &str = "Login successful";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const SIGNUP_SUCCESS: &str = "Account created";

/// State transition function for request outcomes
///
/// Notifications are the only side effect and go through `notifier`.
/// Form fields only change on the form that issued `request_id`; session and
/// navigation follow every outcome in arrival order.
pub fn reduce_data_event(
    state: &mut AppState,
    event: DataEvent,
    notifier: &mut dyn NotificationSink,
) {
    match event {
        // Sign-in answered; anything but an explicit success is a rejection
        DataEvent::SigninCompleted {
            request_id,
            response,
        } => {
            finish_submit(state, request_id);

            if !response.is_success() {
                let message = if response.message.is_empty() {
                    LOGIN_FAILED.to_string()
                } else {
                    response.message.clone()
                };
                tracing::warn!("Sign-in #{} rejected: {}", request_id, message);
                show_error(state, notifier, &message);
                if let Err(e) = state.session.fail(message) {
                    tracing::warn!("{}", e);
                }
                return;
            }

            tracing::info!("Sign-in #{} successful", request_id);
            notifier.success(LOGIN_SUCCESS);
            if let Err(e) = state.session.authenticate(response) {
                tracing::warn!("{}", e);
            }
            state.navigate_to(Screen::Home);
        }

        // Sign-in never answered
        DataEvent::SigninFailed { request_id, error } => {
            tracing::error!("Sign-in #{} request failed: {}", request_id, error);
            finish_submit(state, request_id);
            show_error(state, notifier, LOGIN_FAILED);
            if let Err(e) = state.session.fail(error) {
                tracing::warn!("{}", e);
            }
        }

        // Sign-up answered; only an explicit failure is a rejection
        DataEvent::SignupCompleted {
            request_id,
            response,
        } => {
            if response.is_failure() {
                tracing::warn!("Sign-up #{} rejected: {}", request_id, response.message);
                show_error(state, notifier, &response.message);
                if let Some(error) = finish_submit(state, request_id) {
                    *error = Some(response.message);
                }
                return;
            }

            tracing::info!("Sign-up #{} successful", request_id);
            if response.message.is_empty() {
                notifier.success(SIGNUP_SUCCESS);
            } else {
                notifier.success(&response.message);
            }
            finish_submit(state, request_id);
            state.navigate_to(Screen::Login(LoginFormState::new()));
        }

        // Sign-up never answered
        DataEvent::SignupFailed { request_id, error } => {
            tracing::error!("Sign-up #{} request failed: {}", request_id, error);
            show_error(state, notifier, &error);
            if let Some(form_error) = finish_submit(state, request_id) {
                *form_error = Some(error);
            }
        }
    }
}

/// End the submit on the current form if `request_id` issued it
///
/// Returns that form's inline error slot; None when the form on screen is
/// not the one waiting for this outcome.
fn finish_submit(state: &mut AppState, request_id: RequestId) -> Option<&mut Option<String>> {
    let (phase, error) = match state.current_screen_mut() {
        Screen::Login(form) => (&mut form.phase, &mut form.error),
        Screen::Signup(form) => (&mut form.phase, &mut form.error),
        Screen::Home => return None,
    };
    if phase.finish(request_id) {
        Some(error)
    } else {
        None
    }
}

/// Raise an error toast; it becomes the only error on screen
fn show_error(state: &mut AppState, notifier: &mut dyn NotificationSink, message: &str) {
    match state.current_screen_mut() {
        Screen::Login(form) => form.error = None,
        Screen::Signup(form) => form.error = None,
        Screen::Home => {}
    }
    notifier.error(message);
}
