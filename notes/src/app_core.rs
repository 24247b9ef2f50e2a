use crate::commands::handlers;
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};
use notes_auth::{NotificationSink, SessionStore};

/// Trait for handling command execution (production = background tasks, test = mock)
///
/// This trait abstracts the side effects of command execution, allowing tests
/// to inject a mock implementation that doesn't spawn tasks or make HTTP calls.
pub trait DataEventHandler {
    /// Execute a command with access to mutable state
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Testable application core without terminal dependencies
///
/// Generic over the command handler and the notification sink. Production
/// pairs a task-spawning handler with the toast queue; tests pair a recording
/// handler with a recording sink.
pub struct AppCore<H: DataEventHandler, N: NotificationSink> {
    ui_state: AppState,
    handler: H,
    notifier: N,
}

impl<H: DataEventHandler, N: NotificationSink> AppCore<H, N> {
    pub fn new(handler: H, notifier: N, session: SessionStore) -> Self {
        Self {
            ui_state: AppState::new(session),
            handler,
            notifier,
        }
    }

    /// Handle keyboard input and execute the resulting command
    ///
    /// A submit attempt hides any error toast, so the only error left on
    /// screen is the one this attempt produces.
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            if command == AppCommand::SubmitForm {
                self.notifier.dismiss_errors();
            }
            self.handler
                .execute_with_context(command, &mut self.ui_state);
        }
    }

    /// Handle a request outcome (from a background task or a test)
    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.ui_state, event, &mut self.notifier);
    }

    /// Advance the submit spinner, if one is showing
    pub fn tick(&mut self) {
        if let Some(throbber_state) = self.ui_state.submitting_state() {
            throbber_state.calc_next();
        }
    }

    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
