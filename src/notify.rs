//! Notification sink used by the session authority and the registries.
//! The contract is one notification per attempted operation (login, logout,
//! intake, directory change); what the sink does with it is presentation.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success<S: Into<String>>(description: S) -> Self {
        Notification {
            title: "Success".to_string(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn error<S: Into<String>>(description: S) -> Self {
        Notification {
            title: "Error".to_string(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }
}

/// Seam between the core and whatever renders toasts. Implementations must be
/// cheap and non-blocking; the callers treat emission as infallible.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, n: Notification);
}

/// Prints notifications to stderr; used by the console binary.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, n: Notification) {
        match n.variant {
            Variant::Default => eprintln!("[{}] {}", n.title, n.description),
            Variant::Destructive => eprintln!("[{}!] {}", n.title, n.description),
        }
    }
}

/// Collects notifications in memory for inspection; used by tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    buf: Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything collected so far, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.buf.lock())
    }

    pub fn last(&self) -> Option<Notification> {
        self.buf.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.buf.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, n: Notification) {
        self.buf.lock().push(n);
    }
}
