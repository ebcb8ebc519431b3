//! User-facing notifications.
//!
//! The notifier is an injected capability: the orchestrator only knows the
//! `Notifier` trait, so tests can swap in a recording implementation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Modal alert payload: icon, title, text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub text: String,
}

impl Notification {
    pub fn success(title: &str, text: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.to_string(),
            text: text.to_string(),
        }
    }

    pub fn error(title: &str, text: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.to_string(),
            text: text.to_string(),
        }
    }
}

pub trait Notifier: Send {
    fn notify(&self, notification: &Notification);
}

/// Prints each notification as a single bannered line on stdout.
#[derive(Debug, Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, notification: &Notification) {
        let marker = match notification.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
        };
        println!("[{}] {} {}", marker, notification.title, notification.text);
    }
}
