// Wire types shared by the gateway and its callers
pub mod common;

// Client library (public API for the notes app)
mod client;
mod error;
mod notify;
mod session;
mod validation;

pub use client::{init, AuthGateway, GatewayError, HttpAuthGateway, Settings};
pub use common::{AuthResponse, SigninRequest, SignupRequest};
pub use error::AuthError;
pub use notify::{Notification, NotificationSink, RecordingSink, Severity};
pub use session::{SessionError, SessionState, SessionStore};
pub use validation::is_valid_email;
