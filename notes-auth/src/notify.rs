/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Fire-and-forget display of transient success/error messages
///
/// At most one error is shown at a time: `error` replaces any error still
/// visible.
pub trait NotificationSink {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
    /// Hide any visible error (a new attempt is starting)
    fn dismiss_errors(&mut self);
}

/// In-memory sink holding what a display would currently show, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub notifications: Vec<Notification>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.messages(Severity::Error)
    }

    pub fn successes(&self) -> Vec<&str> {
        self.messages(Severity::Success)
    }

    fn messages(&self, severity: Severity) -> Vec<&str> {
        self.notifications
            .iter()
            .filter(|n| n.severity == severity)
            .map(|n| n.message.as_str())
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn success(&mut self, message: &str) {
        self.notifications.push(Notification {
            severity: Severity::Success,
            message: message.to_string(),
        });
    }

    fn error(&mut self, message: &str) {
        self.dismiss_errors();
        self.notifications.push(Notification {
            severity: Severity::Error,
            message: message.to_string(),
        });
    }

    fn dismiss_errors(&mut self) {
        self.notifications.retain(|n| n.severity != Severity::Error);
    }
}
