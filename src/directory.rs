//! Staff directory backing the user-administration screen. This is a mock
//! collaborator: rows live in memory, passwords are validated on intake and
//! then discarded, and nothing persists across restarts.
//!
//! The directory's role vocabulary (`admin|sales_employee|cashier`) is not
//! the same enumeration the session authority uses (`admin|sales|cashier`).
//! The two screens grew their own spellings upstream; they stay separate
//! here rather than being silently reconciled.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Local;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::notify::{Notification, NotificationSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Admin,
    SalesEmployee,
    Cashier,
}

impl StaffRole {
    pub fn as_str(self) -> &'static str {
        match self {
            StaffRole::Admin => "admin",
            StaffRole::SalesEmployee => "sales_employee",
            StaffRole::Cashier => "cashier",
        }
    }

    /// Human label used by the admin table.
    pub fn display_name(self) -> &'static str {
        match self {
            StaffRole::Admin => "Admin",
            StaffRole::SalesEmployee => "Sales Employee",
            StaffRole::Cashier => "Cashier",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaffRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(StaffRole::Admin),
            "sales_employee" => Ok(StaffRole::SalesEmployee),
            "cashier" => Ok(StaffRole::Cashier),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: StaffRole,
    pub created_at: String,
}

/// Intake shape for `create_user`. The password is required by the form but
/// never stored; `DirectoryUser` carries no credential fields.
#[derive(Debug, Clone)]
pub struct NewStaffUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: StaffRole,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("No such user: {0}")]
    UnknownUser(String),
}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

pub struct UserDirectory {
    sink: Arc<dyn NotificationSink>,
    users: RwLock<Vec<DirectoryUser>>,
}

fn seed_user(id: &str, email: &str, name: &str, role: StaffRole, created_at: &str) -> DirectoryUser {
    DirectoryUser {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
        created_at: created_at.to_string(),
    }
}

impl UserDirectory {
    /// Directory pre-populated with the demo staff rows.
    pub fn with_mock_users(sink: Arc<dyn NotificationSink>) -> Self {
        let users = vec![
            seed_user("1", "admin@escaoptical.com", "System Administrator", StaffRole::Admin, "2025-01-01"),
            seed_user("2", "ace@escaoptical.com", "Ace", StaffRole::SalesEmployee, "2025-01-02"),
            seed_user("3", "yhel@escaoptical.com", "Yhel", StaffRole::SalesEmployee, "2025-01-02"),
            seed_user("4", "jil@escaoptical.com", "Jil", StaffRole::SalesEmployee, "2025-01-02"),
            seed_user("5", "mel@escaoptical.com", "Mel", StaffRole::SalesEmployee, "2025-01-02"),
            seed_user("6", "jeselle@escaoptical.com", "Jeselle", StaffRole::SalesEmployee, "2025-01-02"),
            seed_user("7", "eric@escaoptical.com", "Eric", StaffRole::SalesEmployee, "2025-01-02"),
            seed_user("8", "john@escaoptical.com", "John", StaffRole::SalesEmployee, "2025-01-02"),
            seed_user("9", "cashier@escaoptical.com", "Cashier", StaffRole::Cashier, "2025-01-03"),
        ];
        UserDirectory {
            sink,
            users: RwLock::new(users),
        }
    }

    pub fn empty(sink: Arc<dyn NotificationSink>) -> Self {
        UserDirectory {
            sink,
            users: RwLock::new(Vec::new()),
        }
    }

    pub fn list(&self) -> Vec<DirectoryUser> {
        self.users.read().clone()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    /// Validate and append a new staff row. The id scheme follows the mock
    /// screen: next ordinal as a string.
    pub fn create_user(&self, new: NewStaffUser) -> Result<DirectoryUser, DirectoryError> {
        let result = self.validate_and_insert(new);
        match &result {
            Ok(u) => {
                info!(target: "directory", "user created id={} role={}", u.id, u.role);
                self.sink
                    .notify(Notification::success("User created successfully!"));
            }
            Err(e) => {
                self.sink.notify(Notification::error(e.to_string()));
            }
        }
        result
    }

    fn validate_and_insert(&self, new: NewStaffUser) -> Result<DirectoryUser, DirectoryError> {
        if new.name.trim().is_empty() || new.email.trim().is_empty() || new.password.is_empty() {
            return Err(DirectoryError::MissingFields);
        }
        if !EMAIL_RE.is_match(&new.email) {
            return Err(DirectoryError::InvalidEmail);
        }
        let mut users = self.users.write();
        let user = DirectoryUser {
            id: (users.len() + 1).to_string(),
            email: new.email,
            name: new.name,
            role: new.role,
            created_at: Local::now().date_naive().to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }

    /// Change the role on an existing row.
    pub fn update_role(&self, user_id: &str, new_role: StaffRole) -> Result<(), DirectoryError> {
        let updated = {
            let mut users = self.users.write();
            match users.iter_mut().find(|u| u.id == user_id) {
                Some(u) => {
                    u.role = new_role;
                    true
                }
                None => false,
            }
        };
        if updated {
            info!(target: "directory", "role updated id={} role={}", user_id, new_role);
            self.sink
                .notify(Notification::success("User role updated successfully"));
            Ok(())
        } else {
            let err = DirectoryError::UnknownUser(user_id.to_string());
            self.sink
                .notify(Notification::error("Failed to update user role"));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{MemorySink, Variant};

    fn directory() -> (UserDirectory, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (UserDirectory::with_mock_users(sink.clone()), sink)
    }

    fn new_user(name: &str, email: &str, password: &str) -> NewStaffUser {
        NewStaffUser {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: StaffRole::SalesEmployee,
        }
    }

    #[test]
    fn seeds_nine_mock_rows() {
        let (dir, _sink) = directory();
        let users = dir.list();
        assert_eq!(users.len(), 9);
        assert_eq!(users[0].role, StaffRole::Admin);
        assert_eq!(users[8].role, StaffRole::Cashier);
        assert_eq!(users[1].created_at, "2025-01-02");
    }

    #[test]
    fn create_user_appends_with_next_ordinal_id() {
        let (dir, sink) = directory();
        let u = dir
            .create_user(new_user("Nina", "nina@escaoptical.com", "pw"))
            .unwrap();
        assert_eq!(u.id, "10");
        assert_eq!(dir.len(), 10);
        assert_eq!(sink.last().unwrap().description, "User created successfully!");
        // Stored row never carries the password.
        let v = serde_json::to_value(&u).unwrap();
        assert!(v.get("password").is_none());
    }

    #[test]
    fn create_user_requires_all_fields() {
        let (dir, sink) = directory();
        let err = dir.create_user(new_user("", "a@b.co", "pw")).unwrap_err();
        assert_eq!(err, DirectoryError::MissingFields);
        assert!(dir.create_user(new_user("Nina", "", "pw")).is_err());
        assert!(dir.create_user(new_user("Nina", "a@b.co", "")).is_err());
        assert_eq!(dir.len(), 9);
        let n = sink.last().unwrap();
        assert_eq!(n.variant, Variant::Destructive);
        assert_eq!(n.description, "Please fill in all fields");
    }

    #[test]
    fn create_user_rejects_malformed_email() {
        let (dir, _sink) = directory();
        let err = dir
            .create_user(new_user("Nina", "not-an-email", "pw"))
            .unwrap_err();
        assert_eq!(err, DirectoryError::InvalidEmail);
    }

    #[test]
    fn update_role_rewrites_matching_row() {
        let (dir, sink) = directory();
        dir.update_role("9", StaffRole::SalesEmployee).unwrap();
        let users = dir.list();
        assert_eq!(users[8].role, StaffRole::SalesEmployee);
        assert_eq!(
            sink.last().unwrap().description,
            "User role updated successfully"
        );
    }

    #[test]
    fn update_role_unknown_id_is_not_found() {
        let (dir, sink) = directory();
        let err = dir.update_role("42", StaffRole::Admin).unwrap_err();
        assert_eq!(err, DirectoryError::UnknownUser("42".into()));
        assert_eq!(sink.last().unwrap().description, "Failed to update user role");
    }

    #[test]
    fn staff_role_wire_names_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&StaffRole::SalesEmployee).unwrap(),
            "\"sales_employee\""
        );
        assert_eq!("sales_employee".parse::<StaffRole>(), Ok(StaffRole::SalesEmployee));
        assert!("sales".parse::<StaffRole>().is_err());
    }
}
