use notes_auth::{AuthResponse, SigninRequest, SignupRequest};

/// Commands to execute (user actions → state changes or requests)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Form editing
    FocusField { forward: bool },
    AppendChar(char),
    DeleteChar,
    ClearField,
    TogglePasswordMask,
    SubmitForm,

    // Navigation
    SwitchAuthScreen,
    SignOut,

    // System
    Quit,
}

/// Identifies one form submission
///
/// Outcomes carry it back so they only settle the form that issued them.
pub type RequestId = u64;

/// Requests produced by a valid form submission
#[derive(Debug, Clone)]
pub enum AuthRequest {
    Signin(RequestId, SigninRequest),
    Signup(RequestId, SignupRequest),
}

impl AuthRequest {
    pub fn id(&self) -> RequestId {
        match self {
            AuthRequest::Signin(id, _) | AuthRequest::Signup(id, _) => *id,
        }
    }
}

/// Events from background tasks (responses to requests)
#[derive(Debug, Clone)]
pub enum DataEvent {
    /// The sign-in endpoint answered (either way)
    SigninCompleted {
        request_id: RequestId,
        response: AuthResponse,
    },
    /// The sign-in request produced no usable answer
    SigninFailed {
        request_id: RequestId,
        error: String,
    },

    SignupCompleted {
        request_id: RequestId,
        response: AuthResponse,
    },
    SignupFailed {
        request_id: RequestId,
        error: String,
    },
}

impl DataEvent {
    /// Variant name, for logs (session payloads stay out of the log file)
    pub fn name(&self) -> &'static str {
        match self {
            DataEvent::SigninCompleted { .. } => "SigninCompleted",
            DataEvent::SigninFailed { .. } => "SigninFailed",
            DataEvent::SignupCompleted { .. } => "SignupCompleted",
            DataEvent::SignupFailed { .. } => "SignupFailed",
        }
    }
}
