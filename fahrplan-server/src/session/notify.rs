//! User-visible notifications.
//!
//! Every mutating operation (sign-in/out, favorite add/remove, clear
//! history) produces exactly one success or one error notification. The
//! notifier is a fire-and-forget sink; delivery to the user is the web
//! layer's concern.

use serde::Serialize;
use tokio::sync::mpsc;

/// Outcome flavor of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Cloneable sending half of the notification queue.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    /// Create a notifier and the receiving end of its queue.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Emit a success notification.
    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    /// Emit an error notification.
    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    fn push(&self, kind: NotificationKind, message: String) {
        // A closed queue means nobody is displaying toasts anymore; the
        // operation itself must not fail because of that.
        let _ = self.tx.send(Notification { kind, message });
    }
}
