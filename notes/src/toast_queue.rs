use notes_auth::{Notification, NotificationSink, Severity};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Oldest toasts are dropped once this many are on screen
pub const MAX_TOASTS: usize = 5;

/// Longest time a toast stays up
pub const MAX_TOAST_DURATION: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

/// Transient notifications shown over the current screen
///
/// Toasts are independent of navigation: one raised just before a screen
/// change stays visible on the next screen until it expires. Only one error
/// toast is kept; a new error replaces it.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    duration: Duration,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration: duration.min(MAX_TOAST_DURATION),
        }
    }

    pub fn push_at(&mut self, severity: Severity, message: &str, now: Instant) {
        if severity == Severity::Error {
            self.dismiss_errors();
        }
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notification: Notification {
                severity,
                message: message.to_string(),
            },
            expires_at: now + self.duration,
        });
    }

    /// Drop expired toasts; returns true when anything was removed
    pub fn prune_at(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        self.toasts.len() != before
    }

    /// Toasts in display order, oldest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

impl NotificationSink for ToastQueue {
    fn success(&mut self, message: &str) {
        tracing::debug!("Toast (success): {}", message);
        self.push_at(Severity::Success, message, Instant::now());
    }

    fn error(&mut self, message: &str) {
        tracing::debug!("Toast (error): {}", message);
        self.push_at(Severity::Error, message, Instant::now());
    }

    fn dismiss_errors(&mut self) {
        self.toasts
            .retain(|toast| toast.notification.severity != Severity::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(4);

    #[test]
    fn test_toasts_expire_after_duration() {
        let mut queue = ToastQueue::new(TTL);
        let start = Instant::now();
        queue.push_at(Severity::Success, "Login successful", start);

        assert!(!queue.prune_at(start + Duration::from_secs(3)));
        assert_eq!(queue.len(), 1);

        assert!(queue.prune_at(start + TTL));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_toasts_expire_independently() {
        let mut queue = ToastQueue::new(TTL);
        let start = Instant::now();
        queue.push_at(Severity::Success, "first", start);
        queue.push_at(Severity::Success, "second", start + Duration::from_secs(2));

        queue.prune_at(start + Duration::from_secs(5));

        let remaining: Vec<_> = queue
            .visible()
            .map(|t| t.notification.message.as_str())
            .collect();
        assert_eq!(remaining, vec!["second"]);
    }

    #[test]
    fn test_oldest_toast_dropped_when_full() {
        let mut queue = ToastQueue::new(TTL);
        let now = Instant::now();
        for i in 0..=MAX_TOASTS {
            queue.push_at(Severity::Success, &format!("toast {}", i), now);
        }

        assert_eq!(queue.len(), MAX_TOASTS);
        assert_eq!(
            queue.visible().next().map(|t| t.notification.message.as_str()),
            Some("toast 1")
        );
    }

    #[test]
    fn test_new_error_replaces_visible_error() {
        let mut queue = ToastQueue::new(TTL);
        queue.success("Login successful");
        queue.error("Invalid credentials");
        queue.error("Invalid credentials");

        let errors: Vec<_> = queue
            .visible()
            .filter(|t| t.notification.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_dismiss_errors_keeps_successes() {
        let mut queue = ToastQueue::new(TTL);
        queue.success("Account created");
        queue.error("Login failed. Please try again.");

        queue.dismiss_errors();

        let messages: Vec<_> = queue
            .visible()
            .map(|t| t.notification.message.as_str())
            .collect();
        assert_eq!(messages, vec!["Account created"]);
    }

    #[test]
    fn test_huge_duration_is_clamped() {
        let mut queue = ToastQueue::new(Duration::from_secs(u64::MAX));
        let now = Instant::now();

        // Must not overflow
        queue.push_at(Severity::Error, "boom", now);

        assert!(!queue.prune_at(now + MAX_TOAST_DURATION - Duration::from_secs(1)));
        assert!(queue.prune_at(now + MAX_TOAST_DURATION));
    }

    #[test]
    fn test_sink_methods_record_severity() {
        let mut queue = ToastQueue::new(TTL);
        queue.success("yay");
        queue.error("nope");

        let severities: Vec<_> = queue.visible().map(|t| t.notification.severity).collect();
        assert_eq!(severities, vec![Severity::Success, Severity::Error]);
    }
}
