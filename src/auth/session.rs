use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::notify::{Notification, NotificationSink};

use super::principal::Principal;
use super::role::Role;
use super::roster::CredentialSource;

/// Single-session authority: validates credentials against its source,
/// holds the one authenticated principal for the running application, and
/// answers role-sufficiency queries for feature gates.
///
/// The authority is the only writer of the session cell; everything else
/// reads through `principal()` / `has_role()`. There is exactly one live
/// session per authority, and a fresh login simply overwrites it.
pub struct SessionAuthority {
    source: Arc<dyn CredentialSource>,
    sink: Arc<dyn NotificationSink>,
    current: RwLock<Option<Principal>>,
}

impl SessionAuthority {
    pub fn new(source: Arc<dyn CredentialSource>, sink: Arc<dyn NotificationSink>) -> Self {
        SessionAuthority {
            source,
            sink,
            current: RwLock::new(None),
        }
    }

    /// Validate a username/password pair and install the matching principal.
    ///
    /// Returns true on success. Never raises: a credential mismatch and an
    /// internal source fault both come back as false, distinguished only by
    /// the notification text. Attempts are independent; there is no lockout
    /// or attempt counting.
    pub fn login(&self, username: &str, password: &str) -> bool {
        match self.source.authenticate(username, password) {
            Ok(Some(entry)) => {
                let principal = Principal::from(&entry);
                info!(target: "auth", "login ok user_id={} role={}", principal.id, principal.role);
                *self.current.write() = Some(principal);
                self.sink
                    .notify(Notification::success(format!("Welcome back, {}!", entry.name)));
                true
            }
            Ok(None) => {
                debug!(target: "auth", "login rejected for username={:?}", username);
                self.sink
                    .notify(Notification::error("Invalid username or password"));
                false
            }
            Err(e) => {
                warn!(target: "auth", "credential source failure: {e:#}");
                self.sink
                    .notify(Notification::error("Login failed. Please try again."));
                false
            }
        }
    }

    /// Clear the session unconditionally. The state change is idempotent but
    /// the notification is emitted on every call.
    pub fn logout(&self) {
        if let Some(p) = self.current.write().take() {
            info!(target: "auth", "logout user_id={}", p.id);
        }
        self.sink
            .notify(Notification::success("Successfully logged out"));
    }

    /// Role-sufficiency gate. Pure query: false while unauthenticated, false
    /// for any requirement outside the closed role set, otherwise the
    /// downward-inclusive hierarchy check.
    pub fn has_role(&self, required: &str) -> bool {
        let guard = self.current.read();
        let Some(p) = guard.as_ref() else {
            return false;
        };
        match Role::from_str(required) {
            Ok(required) => p.role.satisfies(required),
            Err(()) => false,
        }
    }

    /// Snapshot of the current principal, if any. Read-only; display
    /// components render from this.
    pub fn principal(&self) -> Option<Principal> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }
}
