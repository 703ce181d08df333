use serde::{Deserialize, Serialize};

use super::role::Role;
use super::roster::RosterEntry;

/// The authenticated identity handed to display components. Built from a
/// roster entry with the credential fields stripped; username and password
/// never pass through this type, so they cannot leak into logs or views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<&RosterEntry> for Principal {
    fn from(e: &RosterEntry) -> Self {
        Principal {
            id: e.id.clone(),
            email: e.email.clone(),
            name: e.name.clone(),
            role: e.role,
        }
    }
}
