use crate::common::AuthResponse;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

/// Current authentication status of the application
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    Pending,
    Authenticated(AuthResponse),
    Failed(String),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Authenticated(_) => "authenticated",
            Self::Failed(_) => "failed",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Invalid session transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

/// Process-wide session holder
///
/// Cloning yields another handle to the same state. Only the login flow and
/// sign-out call the transition methods; everything else reads.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sign-in request issued: `Idle | Failed -> Pending`
    pub fn begin(&self) -> Result<(), SessionError> {
        self.transition("pending", |current| match current {
            SessionState::Idle | SessionState::Failed(_) => Some(SessionState::Pending),
            _ => None,
        })
    }

    /// Sign-in accepted: `-> Authenticated(response)`
    ///
    /// Allowed from any state that follows a `begin`, so overlapping responses
    /// are applied in arrival order.
    pub fn authenticate(&self, response: AuthResponse) -> Result<(), SessionError> {
        self.transition("authenticated", move |current| match current {
            SessionState::Idle => None,
            _ => Some(SessionState::Authenticated(response)),
        })
    }

    /// Sign-in rejected or never answered: `-> Failed(message)`
    pub fn fail(&self, message: impl Into<String>) -> Result<(), SessionError> {
        let message = message.into();
        self.transition("failed", move |current| match current {
            SessionState::Idle => None,
            _ => Some(SessionState::Failed(message)),
        })
    }

    /// Sign out: back to `Idle` from any state
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        tracing::info!("Session {} -> idle", state.name());
        *state = SessionState::Idle;
    }

    fn transition<F>(&self, to: &'static str, next: F) -> Result<(), SessionError>
    where
        F: FnOnce(&SessionState) -> Option<SessionState>,
    {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let from = state.name();
        match next(&*state) {
            Some(new_state) => {
                tracing::info!("Session {} -> {}", from, to);
                *state = new_state;
                Ok(())
            }
            None => {
                tracing::warn!("Rejected session transition {} -> {}", from, to);
                Err(SessionError::InvalidTransition { from, to })
            }
        }
    }
}
