//! Notification seam between the controller and whatever shows toasts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Receiver for submit outcomes. `FormController::submit` calls exactly one
/// of the two methods per invocation.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Collects notifications in call order; used by front ends that forward them
/// later and by tests.
impl Notifier for Vec<Notification> {
    fn success(&mut self, message: &str) {
        self.push(Notification::new(NotificationLevel::Success, message));
    }

    fn error(&mut self, message: &str) {
        self.push(Notification::new(NotificationLevel::Error, message));
    }
}
