pub mod password_input;
pub mod reducer;
pub mod validators;

pub use password_input::PasswordInput;

use crate::events::RequestId;
use crate::ui::screens::Screen;
use notes_auth::SessionStore;
use throbber_widgets_tui::ThrobberState;

/// Where a form is in its submit cycle
///
/// Validation happens synchronously inside the submit command, so the only
/// observable phases are editing and waiting for the server.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting(RequestId, ThrobberState),
}

impl FormPhase {
    pub fn submitting(request_id: RequestId) -> Self {
        Self::Submitting(request_id, ThrobberState::default())
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(..))
    }

    /// Back to editing if `request_id` is the request this form is waiting on
    pub fn finish(&mut self, request_id: RequestId) -> bool {
        match self {
            Self::Submitting(id, _) if *id == request_id => {
                *self = Self::Editing;
                true
            }
            _ => false,
        }
    }
}

/// Focusable fields on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn next(&self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }

    pub fn prev(&self) -> Self {
        // Two fields: previous is next
        self.next()
    }
}

/// Focusable fields on the signup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    Name,
    Email,
    Password,
}

impl SignupField {
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Password,
            Self::Password => Self::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Name => Self::Password,
            Self::Email => Self::Name,
            Self::Password => Self::Email,
        }
    }
}

/// State for the login form
#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub email: String,
    pub password: PasswordInput,
    pub focus: LoginField,
    pub error: Option<String>,
    pub phase: FormPhase,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// State for the signup form
#[derive(Debug, Clone, Default)]
pub struct SignupFormState {
    pub name: String,
    pub email: String,
    pub password: PasswordInput,
    pub focus: SignupField,
    pub error: Option<String>,
    pub phase: FormPhase,
}

impl SignupFormState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Holds exactly one screen; navigating replaces it
    pub history: Vec<Screen>,
    next_request_id: RequestId,

    // Shared with the rest of the application
    pub session: SessionStore,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new(session: SessionStore) -> Self {
        Self {
            history: vec![Screen::Login(LoginFormState::new())],
            next_request_id: 1,
            session,
            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    /// Navigate to a new screen, discarding the current one and its form contents
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating {} -> {}",
            self.current_screen().route(),
            screen.route()
        );
        self.history.clear();
        self.history.push(screen);
    }

    /// Fresh ID for a form submission
    pub fn allocate_request_id(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Spinner of the in-flight submit on the current screen, if any
    pub fn submitting_state(&mut self) -> Option<&mut ThrobberState> {
        let phase = match self.current_screen_mut() {
            Screen::Login(form) => &mut form.phase,
            Screen::Signup(form) => &mut form.phase,
            Screen::Home => return None,
        };
        match phase {
            FormPhase::Submitting(_, throbber_state) => Some(throbber_state),
            FormPhase::Editing => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SessionStore::new())
    }
}
