use anyhow::Result;
use once_cell::sync::Lazy;

use super::role::Role;

/// One row of the credential roster. Credentials are plaintext by contract:
/// this is a stand-in for a real identity provider, and lookups compare by
/// exact string equality with no normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Immutable username/password roster. Usernames are unique; the table is
/// fixed for the lifetime of the process and exposes no mutation.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        debug_assert!(
            {
                let mut names: Vec<&str> = entries.iter().map(|e| e.username.as_str()).collect();
                names.sort_unstable();
                names.windows(2).all(|w| w[0] != w[1])
            },
            "roster usernames must be unique"
        );
        Roster { entries }
    }

    /// Exact, case-sensitive match on both username and password. Empty
    /// strings are legal inputs and simply match nothing.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&RosterEntry> {
        self.entries
            .iter()
            .find(|e| e.username == username && e.password == password)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }
}

/// Credential lookup seam for the session authority. The in-memory roster is
/// the only production source; the Result return reserves the failure path
/// for sources that can actually fail (a directory service, a database).
pub trait CredentialSource: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> Result<Option<RosterEntry>>;
}

impl CredentialSource for Roster {
    fn authenticate(&self, username: &str, password: &str) -> Result<Option<RosterEntry>> {
        Ok(Roster::authenticate(self, username, password).cloned())
    }
}

fn entry(id: &str, username: &str, password: &str, name: &str, role: Role) -> RosterEntry {
    RosterEntry {
        id: id.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        email: format!("{}@escaoptical.com", username),
        name: name.to_string(),
        role,
    }
}

static DEFAULT_ROSTER: Lazy<Roster> = Lazy::new(|| {
    Roster::new(vec![
        entry("1", "admin", "admin", "System Administrator", Role::Admin),
        entry("2", "ace", "sales123", "Ace", Role::Sales),
        entry("3", "yhel", "sales123", "Yhel", Role::Sales),
        entry("4", "jil", "sales123", "Jil", Role::Sales),
        entry("5", "mel", "sales123", "Mel", Role::Sales),
        entry("6", "jeselle", "sales123", "Jeselle", Role::Sales),
        entry("7", "eric", "sales123", "Eric", Role::Sales),
        entry("8", "john", "sales123", "John", Role::Sales),
        entry("9", "cashier", "cashier123", "Cashier", Role::Cashier),
    ])
});

/// The seed roster of the demo deployment: one admin, seven sales staff and
/// one cashier.
pub fn default_roster() -> &'static Roster {
    &DEFAULT_ROSTER
}
