use crate::background::{auth_requester::AuthRequester, BackgroundTaskManager};
use crate::events::{AppCommand, AuthRequest};
use crate::state::validators;
use crate::state::*;
use crate::ui::screens::Screen;
use notes_auth::AuthGateway;

/// Execute a command, spawning a background request when a submit validates
pub fn execute_command<G: AuthGateway>(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    requester: &AuthRequester<G>,
) {
    let Some(request) = apply_command(command, state) else {
        return;
    };

    match request {
        AuthRequest::Signin(request_id, req) => {
            let requester = requester.clone();
            task_manager.spawn_task(format!("signin-{}", request_id), async move {
                requester.signin(request_id, req).await;
            });
        }
        AuthRequest::Signup(request_id, req) => {
            let requester = requester.clone();
            task_manager.spawn_task(format!("signup-{}", request_id), async move {
                requester.signup(request_id, req).await;
            });
        }
    }
}

/// Apply a command to the UI state
///
/// Returns the request to issue when a form submission passed validation.
/// Never performs I/O, so tests drive it directly.
pub fn apply_command(command: AppCommand, state: &mut AppState) -> Option<AuthRequest> {
    match command {
        AppCommand::Quit => {
            state.should_quit = true;
        }

        AppCommand::FocusField { forward } => match state.current_screen_mut() {
            Screen::Login(form) => {
                form.focus = if forward {
                    form.focus.next()
                } else {
                    form.focus.prev()
                };
            }
            Screen::Signup(form) => {
                form.focus = if forward {
                    form.focus.next()
                } else {
                    form.focus.prev()
                };
            }
            Screen::Home => {}
        },

        AppCommand::AppendChar(c) => match state.current_screen_mut() {
            Screen::Login(form) => match form.focus {
                LoginField::Email => form.email.push(c),
                LoginField::Password => form.password.push(c),
            },
            Screen::Signup(form) => match form.focus {
                SignupField::Name => form.name.push(c),
                SignupField::Email => form.email.push(c),
                SignupField::Password => form.password.push(c),
            },
            Screen::Home => {}
        },

        AppCommand::DeleteChar => match state.current_screen_mut() {
            Screen::Login(form) => match form.focus {
                LoginField::Email => {
                    form.email.pop();
                }
                LoginField::Password => form.password.pop(),
            },
            Screen::Signup(form) => match form.focus {
                SignupField::Name => {
                    form.name.pop();
                }
                SignupField::Email => {
                    form.email.pop();
                }
                SignupField::Password => form.password.pop(),
            },
            Screen::Home => {}
        },

        AppCommand::ClearField => match state.current_screen_mut() {
            Screen::Login(form) => match form.focus {
                LoginField::Email => form.email.clear(),
                LoginField::Password => form.password.clear(),
            },
            Screen::Signup(form) => match form.focus {
                SignupField::Name => form.name.clear(),
                SignupField::Email => form.email.clear(),
                SignupField::Password => form.password.clear(),
            },
            Screen::Home => {}
        },

        AppCommand::TogglePasswordMask => match state.current_screen_mut() {
            Screen::Login(form) => form.password.toggle_mask(),
            Screen::Signup(form) => form.password.toggle_mask(),
            Screen::Home => {}
        },

        AppCommand::SubmitForm => return submit_current_form(state),

        AppCommand::SwitchAuthScreen => {
            let next = match state.current_screen() {
                Screen::Login(_) => Screen::Signup(SignupFormState::new()),
                Screen::Signup(_) => Screen::Login(LoginFormState::new()),
                Screen::Home => return None,
            };
            state.navigate_to(next);
        }

        AppCommand::SignOut => {
            if matches!(state.current_screen(), Screen::Home) {
                tracing::info!("Signing out");
                state.session.reset();
                state.navigate_to(Screen::Login(LoginFormState::new()));
            }
        }
    }

    None
}

fn submit_current_form(state: &mut AppState) -> Option<AuthRequest> {
    let session = state.session.clone();
    let request_id = state.allocate_request_id();
    match state.current_screen_mut() {
        Screen::Login(form) => {
            if form.phase.is_submitting() {
                tracing::debug!("Sign-in already in flight, ignoring submit");
                return None;
            }

            match validators::validate_login(form) {
                Ok(req) => {
                    form.error = None;
                    form.phase = FormPhase::submitting(request_id);
                    if let Err(e) = session.begin() {
                        tracing::warn!("{}", e);
                    }
                    tracing::info!("Submitting sign-in #{} for {}", request_id, req.email);
                    Some(AuthRequest::Signin(request_id, req))
                }
                Err(error) => {
                    tracing::debug!("Login validation failed: {}", error);
                    form.error = Some(error);
                    None
                }
            }
        }
        Screen::Signup(form) => {
            if form.phase.is_submitting() {
                tracing::debug!("Sign-up already in flight, ignoring submit");
                return None;
            }

            match validators::validate_signup(form) {
                Ok(req) => {
                    form.error = None;
                    form.phase = FormPhase::submitting(request_id);
                    tracing::info!("Submitting sign-up #{} for {}", request_id, req.email);
                    Some(AuthRequest::Signup(request_id, req))
                }
                Err(error) => {
                    tracing::debug!("Signup validation failed: {}", error);
                    form.error = Some(error);
                    None
                }
            }
        }
        Screen::Home => None,
    }
}
