//! # Notifications
//!
//! Fire-and-forget user notifications (toasts in the browser). The core never
//! consumes a return value from the sink.

use serde::{Deserialize, Serialize};

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Destructive,
}

/// One user-visible message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Info)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Success)
    }

    pub fn destructive(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Destructive)
    }
}

/// Where notifications go
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Sink that only logs; used by native tools and as a fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Destructive => {
                tracing::warn!(title = %notification.title, "{}", notification.message)
            }
            Severity::Info | Severity::Success => {
                tracing::info!(title = %notification.title, "{}", notification.message)
            }
        }
    }
}
