use notes::events::{AuthRequest, DataEvent};
use notes::input::{Key, KeyEvent};
use notes::state::reducer::{LOGIN_FAILED, LOGIN_SUCCESS};
use notes::state::validators::{INVALID_EMAIL, MISSING_NAME, MISSING_PASSWORD};
use notes::state::{FormPhase, LoginFormState, SignupFormState};
use notes::testing::TestApp;
use notes::ui::screens::Screen;
use notes_auth::{AuthResponse, SessionState, SessionStore};
use secrecy::ExposeSecret;

fn login_form(app: &TestApp) -> &LoginFormState {
    match app.state().current_screen() {
        Screen::Login(form) => form,
        other => panic!("Expected Login screen, got {}", other.route()),
    }
}

fn signup_form(app: &TestApp) -> &SignupFormState {
    match app.state().current_screen() {
        Screen::Signup(form) => form,
        other => panic!("Expected Signup screen, got {}", other.route()),
    }
}

fn login_screen() -> std::mem::Discriminant<Screen> {
    std::mem::discriminant(&Screen::Login(LoginFormState::new()))
}

fn signup_screen() -> std::mem::Discriminant<Screen> {
    std::mem::discriminant(&Screen::Signup(SignupFormState::new()))
}

fn home_screen() -> std::mem::Discriminant<Screen> {
    std::mem::discriminant(&Screen::Home)
}

/// Fill and submit the login form
fn submit_login(app: &mut TestApp, email: &str, password: &str) {
    app.type_text(email);
    app.send_key(Key::Tab);
    app.type_text(password);
    app.send_key(Key::Enter);
}

/// Switch to signup, fill and submit it
fn submit_signup(app: &mut TestApp, name: &str, email: &str, password: &str) {
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('n')));
    app.type_text(name);
    app.send_key(Key::Tab);
    app.type_text(email);
    app.send_key(Key::Tab);
    app.type_text(password);
    app.send_key(Key::Enter);
}

// ============================================================================
// Startup and quitting
// ============================================================================

#[test]
fn test_starts_on_login_with_idle_session() {
    let app = TestApp::new();

    app.assert_screen_type(login_screen());
    assert_eq!(app.state().session.state(), SessionState::Idle);
    assert!(login_form(&app).password.is_masked());
    app.assert_not_quit();
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();

    // 'q' is just text on the login form
    app.send_key(Key::Char('q'));
    app.assert_not_quit();
    assert_eq!(login_form(&app).email, "q");

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('c')));
    app.assert_should_quit();
}

// ============================================================================
// Login validation
// ============================================================================

#[test]
fn test_login_empty_email_is_invalid() {
    let mut app = TestApp::new();

    app.send_key(Key::Enter);

    assert_eq!(login_form(&app).error.as_deref(), Some(INVALID_EMAIL));
    assert!(app.sent_requests().is_empty());
}

#[test]
fn test_login_malformed_emails_rejected() {
    for email in ["abc", "a@b", "@b.com", "a b@c.com"] {
        let mut app = TestApp::new();
        submit_login(&mut app, email, "x");

        assert_eq!(
            login_form(&app).error.as_deref(),
            Some(INVALID_EMAIL),
            "{email} should be rejected"
        );
        assert!(app.sent_requests().is_empty());
        assert_eq!(app.state().session.state(), SessionState::Idle);
    }
}

#[test]
fn test_login_empty_password_rejected() {
    let mut app = TestApp::new();
    submit_login(&mut app, "a@b.com", "");

    assert_eq!(login_form(&app).error.as_deref(), Some(MISSING_PASSWORD));
    assert!(app.sent_requests().is_empty());
}

#[test]
fn test_login_error_cleared_by_successful_validation() {
    let mut app = TestApp::new();
    app.send_key(Key::Enter);
    assert!(login_form(&app).error.is_some());

    submit_login(&mut app, "a@b.com", "x");

    assert!(login_form(&app).error.is_none());
    assert_eq!(app.sent_requests().len(), 1);
}

// ============================================================================
// Login request flow
// ============================================================================

#[test]
fn test_login_sends_exact_credentials() {
    let mut app = TestApp::new();
    submit_login(&mut app, "a@b.com", "x");

    let [AuthRequest::Signin(_, req)] = app.sent_requests() else {
        panic!("Expected exactly one sign-in request");
    };
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.password.expose_secret(), "x");
    assert_eq!(app.state().session.state(), SessionState::Pending);
    assert!(login_form(&app).phase.is_submitting());
}

#[test]
fn test_login_success_flow() {
    let mut app = TestApp::new();
    submit_login(&mut app, "a@b.com", "x");

    let response = AuthResponse::success("ok").with_field("token", "t");
    app.send_data_event(DataEvent::SigninCompleted {
        request_id: app.last_request_id(),
        response: response.clone(),
    });

    app.assert_screen_type(home_screen());
    assert_eq!(
        app.state().session.state(),
        SessionState::Authenticated(response)
    );
    assert_eq!(app.notifications().successes(), vec![LOGIN_SUCCESS]);
    assert!(app.notifications().errors().is_empty());
}

#[test]
fn test_login_rejected_flow() {
    let mut app = TestApp::new();
    submit_login(&mut app, "a@b.com", "x");

    app.send_data_event(DataEvent::SigninCompleted {
        request_id: app.last_request_id(),
        response: AuthResponse::failure("Invalid credentials"),
    });

    app.assert_screen_type(login_screen());
    assert_eq!(app.notifications().errors(), vec!["Invalid credentials"]);
    assert!(matches!(app.state().session.state(), SessionState::Failed(_)));

    // Form keeps its contents and is usable again
    let form = login_form(&app);
    assert_eq!(form.email, "a@b.com");
    assert_eq!(form.password.value(), "x");
    assert_eq!(form.phase, FormPhase::Editing);
}

#[test]
fn test_login_network_failure_flow() {
    let mut app = TestApp::new();
    submit_login(&mut app, "a@b.com", "x");

    app.send_data_event(DataEvent::SigninFailed {
        request_id: app.last_request_id(),
        error: "error sending request".to_string(),
    });

    app.assert_screen_type(login_screen());
    assert_eq!(app.notifications().errors(), vec![LOGIN_FAILED]);
    assert!(matches!(app.state().session.state(), SessionState::Failed(_)));
}

#[test]
fn test_login_retry_after_failure() {
    let mut app = TestApp::new();
    submit_login(&mut app, "a@b.com", "x");
    app.send_data_event(DataEvent::SigninFailed {
        request_id: app.last_request_id(),
        error: "timeout".to_string(),
    });

    // Resubmit the same form
    app.send_key(Key::Enter);
    assert_eq!(app.sent_requests().len(), 2);
    assert_eq!(app.state().session.state(), SessionState::Pending);

    app.send_data_event(DataEvent::SigninCompleted {
        request_id: app.last_request_id(),
        response: AuthResponse::success("ok"),
    });
    app.assert_screen_type(home_screen());
}

#[test]
fn test_double_submit_sends_one_request() {
    let mut app = TestApp::new();
    submit_login(&mut app, "a@b.com", "x");
    app.send_key(Key::Enter);
    app.send_key(Key::Enter);

    assert_eq!(app.sent_requests().len(), 1);
}

#[test]
fn test_spinner_advances_only_while_submitting() {
    let mut app = TestApp::new();
    app.tick();
    assert_eq!(login_form(&app).phase, FormPhase::Editing);

    submit_login(&mut app, "a@b.com", "x");
    let before = login_form(&app).phase.clone();
    app.tick();
    assert_ne!(login_form(&app).phase, before);
}

// ============================================================================
// Password mask
// ============================================================================

#[test]
fn test_password_mask_toggle() {
    let mut app = TestApp::new();
    app.send_key(Key::Tab);
    app.type_text("hunter2");

    assert_eq!(login_form(&app).password.display(), "•••••••");

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('t')));
    assert_eq!(login_form(&app).password.display(), "hunter2");

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('t')));
    assert_eq!(login_form(&app).password.display(), "•••••••");
    assert_eq!(login_form(&app).password.value(), "hunter2");
}

#[test]
fn test_toggle_mask_with_empty_password() {
    let mut app = TestApp::new();
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('t')));

    assert!(!login_form(&app).password.is_masked());
    assert_eq!(login_form(&app).password.display(), "");
}

// ============================================================================
// Signup
// ============================================================================

#[test]
fn test_navigate_between_login_and_signup() {
    let mut app = TestApp::new();

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('n')));
    app.assert_screen_type(signup_screen());

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('n')));
    app.assert_screen_type(login_screen());
}

#[test]
fn test_signup_validation_order() {
    let mut app = TestApp::new();
    submit_signup(&mut app, "", "bad", "");
    assert_eq!(signup_form(&app).error.as_deref(), Some(MISSING_NAME));

    let mut app = TestApp::new();
    submit_signup(&mut app, "Ada", "bad", "");
    assert_eq!(signup_form(&app).error.as_deref(), Some(INVALID_EMAIL));

    let mut app = TestApp::new();
    submit_signup(&mut app, "Ada", "ada@example.com", "");
    assert_eq!(signup_form(&app).error.as_deref(), Some(MISSING_PASSWORD));
    assert!(app.sent_requests().is_empty());
}

#[test]
fn test_signup_success_flow() {
    let mut app = TestApp::new();
    submit_signup(&mut app, "Ada", "ada@example.com", "pw");

    let [AuthRequest::Signup(_, req)] = app.sent_requests() else {
        panic!("Expected exactly one sign-up request");
    };
    assert_eq!(req.username, "Ada");
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.password.expose_secret(), "pw");
    assert_eq!(app.state().session.state(), SessionState::Idle);

    app.send_data_event(DataEvent::SignupCompleted {
        request_id: app.last_request_id(),
        response: AuthResponse::success("Account created"),
    });

    app.assert_screen_type(login_screen());
    assert_eq!(app.notifications().successes(), vec!["Account created"]);
    // Signup never signs in
    assert_eq!(app.state().session.state(), SessionState::Idle);
}

#[test]
fn test_signup_rejected_flow() {
    let mut app = TestApp::new();
    submit_signup(&mut app, "Ada", "ada@example.com", "pw");

    app.send_data_event(DataEvent::SignupCompleted {
        request_id: app.last_request_id(),
        response: AuthResponse::failure("Email already registered"),
    });

    app.assert_screen_type(signup_screen());
    assert_eq!(
        signup_form(&app).error.as_deref(),
        Some("Email already registered")
    );
    assert_eq!(
        app.notifications().errors(),
        vec!["Email already registered"]
    );
}

#[test]
fn test_signup_network_failure_flow() {
    let mut app = TestApp::new();
    submit_signup(&mut app, "Ada", "ada@example.com", "pw");

    app.send_data_event(DataEvent::SignupFailed {
        request_id: app.last_request_id(),
        error: "Request failed with status code 500".to_string(),
    });

    app.assert_screen_type(signup_screen());
    assert_eq!(
        signup_form(&app).error.as_deref(),
        Some("Request failed with status code 500")
    );
    assert_eq!(
        app.notifications().errors(),
        vec!["Request failed with status code 500"]
    );
}

// ============================================================================
// Session
// ============================================================================

#[test]
fn test_session_shared_with_outside_observer() {
    let store = SessionStore::new();
    let mut app = TestApp::with_session(store.clone());

    submit_login(&mut app, "a@b.com", "x");
    assert_eq!(store.state(), SessionState::Pending);

    app.send_data_event(DataEvent::SigninCompleted {
        request_id: app.last_request_id(),
        response: AuthResponse::success("ok"),
    });
    assert!(store.state().is_authenticated());
}

#[test]
fn test_sign_out_returns_to_login() {
    let mut app = TestApp::new();
    submit_login(&mut app, "a@b.com", "x");
    app.send_data_event(DataEvent::SigninCompleted {
        request_id: app.last_request_id(),
        response: AuthResponse::success("ok"),
    });
    app.assert_screen_type(home_screen());

    app.send_key(Key::Char('o'));

    app.assert_screen_type(login_screen());
    assert_eq!(app.state().session.state(), SessionState::Idle);
    assert_eq!(login_form(&app).email, "");
}

// ============================================================================
// Screen lifecycle
// ============================================================================

/// Every password still held by a form anywhere in the navigation state
fn retained_passwords(app: &TestApp) -> Vec<String> {
    app.state()
        .history
        .iter()
        .filter_map(|screen| match screen {
            Screen::Login(form) => Some(form.password.value().to_string()),
            Screen::Signup(form) => Some(form.password.value().to_string()),
            Screen::Home => None,
        })
        .filter(|password| !password.is_empty())
        .collect()
}

#[test]
fn test_successful_login_discards_the_password() {
    let mut app = TestApp::new();
    submit_login(&mut app, "a@b.com", "hunter2");
    app.send_data_event(DataEvent::SigninCompleted {
        request_id: app.last_request_id(),
        response: AuthResponse::success("ok"),
    });

    app.assert_screen_type(home_screen());
    assert_eq!(app.state().history.len(), 1);
    assert!(retained_passwords(&app).is_empty());
}

#[test]
fn test_switching_screens_does_not_grow_history() {
    let mut app = TestApp::new();
    app.send_key(Key::Tab);
    app.type_text("hunter2");

    for _ in 0..1000 {
        app.send_key_event(KeyEvent::with_ctrl(Key::Char('n')));
    }

    assert_eq!(app.state().history.len(), 1);
    assert!(retained_passwords(&app).is_empty());
}

#[test]
fn test_stale_outcome_does_not_unlock_newer_submit() {
    let mut app = TestApp::new();
    submit_login(&mut app, "a@b.com", "x");
    let first = app.last_request_id();

    // Leave and come back to a fresh form, then submit again
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('n')));
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('n')));
    submit_login(&mut app, "a@b.com", "y");
    assert_eq!(app.sent_requests().len(), 2);

    app.send_data_event(DataEvent::SigninFailed {
        request_id: first,
        error: "timeout".to_string(),
    });

    // Second request still in flight: Enter is ignored
    assert!(login_form(&app).phase.is_submitting());
    app.send_key(Key::Enter);
    assert_eq!(app.sent_requests().len(), 2);
}

// ============================================================================
// One error at a time
// ============================================================================

#[test]
fn test_repeated_rejections_show_one_error() {
    let mut app = TestApp::new();
    submit_login(&mut app, "a@b.com", "x");
    app.send_data_event(DataEvent::SigninCompleted {
        request_id: app.last_request_id(),
        response: AuthResponse::failure("Invalid credentials"),
    });
    app.send_key(Key::Enter);
    app.send_data_event(DataEvent::SigninCompleted {
        request_id: app.last_request_id(),
        response: AuthResponse::failure("Invalid credentials"),
    });

    assert_eq!(app.notifications().errors(), vec!["Invalid credentials"]);
}

#[test]
fn test_validation_error_replaces_remote_error() {
    let mut app = TestApp::new();
    submit_login(&mut app, "a@b.com", "x");
    app.send_data_event(DataEvent::SigninCompleted {
        request_id: app.last_request_id(),
        response: AuthResponse::failure("Invalid credentials"),
    });

    // Break the email and resubmit
    app.send_key(Key::BackTab);
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('l')));
    app.send_key(Key::Enter);

    assert!(app.notifications().errors().is_empty());
    assert_eq!(login_form(&app).error.as_deref(), Some(INVALID_EMAIL));
}
