use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, AuthRequest, DataEvent, RequestId};
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use crate::ui::screens::Screen;
use notes_auth::{RecordingSink, SessionStore};

/// Mock data event handler for tests (no real async tasks)
///
/// Applies commands synchronously and records the requests a real handler
/// would have sent, so tests can answer them with `send_data_event`.
#[derive(Debug, Default)]
pub struct MockDataHandler {
    pub sent_requests: Vec<AuthRequest>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        if let Some(request) = executor::apply_command(command, state) {
            self.sent_requests.push(request);
        }
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler, RecordingSink>,
}

impl TestApp {
    /// Create a new test app with mock handler
    pub fn new() -> Self {
        Self::with_session(SessionStore::new())
    }

    /// Create a test app sharing an existing session store
    pub fn with_session(session: SessionStore) -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new(), RecordingSink::new(), session),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text into the focused field
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Inject a data event (simulate a server answer or transport failure)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Advance spinners as the UI tick would
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Requests issued so far, in order
    pub fn sent_requests(&self) -> &[AuthRequest] {
        &self.core.handler().sent_requests
    }

    /// ID of the most recent request, to answer it with `send_data_event`
    pub fn last_request_id(&self) -> RequestId {
        self.sent_requests()
            .last()
            .map(AuthRequest::id)
            .expect("No request has been sent")
    }

    /// Notifications currently shown
    pub fn notifications(&self) -> &RecordingSink {
        self.core.notifier()
    }

    /// Assert that the app is on a specific screen type
    ///
    /// Uses discriminant comparison to check screen type without
    /// requiring full equality of state.
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {}",
            current.route()
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
