//! Customer intake for the walk-in queue. Registrations are validated,
//! stamped and appended to an in-memory book; queue progression (serving,
//! completion, OR numbers) is driven elsewhere and only modeled here.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::notify::{Notification, NotificationSink};

/// Optical prescription fields, free-form as written by the doctor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub od: String,
    pub os: String,
    pub ou: String,
    pub pd: String,
    pub add: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityType {
    #[default]
    Regular,
    Priority,
    Emergency,
}

impl PriorityType {
    pub fn as_str(self) -> &'static str {
        match self {
            PriorityType::Regular => "Regular",
            PriorityType::Priority => "Priority",
            PriorityType::Emergency => "Emergency",
        }
    }
}

impl fmt::Display for PriorityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Regular" => Ok(PriorityType::Regular),
            "Priority" => Ok(PriorityType::Priority),
            "Emergency" => Ok(PriorityType::Emergency),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    Waiting,
    Serving,
    Completed,
}

/// Form payload for a registration. Only name and contact number are
/// mandatory; everything else mirrors the intake form's optional fields.
#[derive(Debug, Clone, Default)]
pub struct NewCustomer {
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub age: Option<u32>,
    pub address: String,
    pub occupation: String,
    pub distribution: String,
    pub sales_agent: String,
    pub assigned_doctor: String,
    pub prescription: Prescription,
    pub remarks: String,
    pub priority: PriorityType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub age: u32,
    pub address: String,
    pub occupation: String,
    pub distribution: String,
    pub sales_agent: String,
    pub assigned_doctor: String,
    pub prescription: Prescription,
    pub remarks: String,
    pub priority: PriorityType,
    pub wait_time: u32,
    pub status: QueueStatus,
    pub or_number: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Name and contact number are required")]
    MissingRequiredFields,
    #[error("Invalid email address")]
    InvalidEmail,
}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// In-memory registry of registered customers, append-ordered.
pub struct CustomerBook {
    sink: Arc<dyn NotificationSink>,
    customers: RwLock<Vec<Customer>>,
}

impl CustomerBook {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        CustomerBook {
            sink,
            customers: RwLock::new(Vec::new()),
        }
    }

    /// Validate and register a walk-in. New customers always enter the queue
    /// waiting, with zero accumulated wait and no OR number yet.
    pub fn register(&self, new: NewCustomer) -> Result<Customer, IntakeError> {
        let result = self.validate_and_insert(new);
        match &result {
            Ok(c) => {
                info!(target: "intake", "customer registered id={} priority={}", c.id, c.priority);
                self.sink
                    .notify(Notification::success("Customer registered successfully"));
            }
            Err(e) => {
                self.sink.notify(Notification::error(e.to_string()));
            }
        }
        result
    }

    fn validate_and_insert(&self, new: NewCustomer) -> Result<Customer, IntakeError> {
        if new.name.trim().is_empty() || new.contact_number.trim().is_empty() {
            return Err(IntakeError::MissingRequiredFields);
        }
        if !new.email.is_empty() && !EMAIL_RE.is_match(&new.email) {
            return Err(IntakeError::InvalidEmail);
        }
        let customer = Customer {
            id: Uuid::new_v4(),
            name: new.name,
            contact_number: new.contact_number,
            email: new.email,
            age: new.age.unwrap_or(0),
            address: new.address,
            occupation: new.occupation,
            distribution: new.distribution,
            sales_agent: new.sales_agent,
            assigned_doctor: new.assigned_doctor,
            prescription: new.prescription,
            remarks: new.remarks,
            priority: new.priority,
            wait_time: 0,
            status: QueueStatus::Waiting,
            or_number: String::new(),
        };
        self.customers.write().push(customer.clone());
        Ok(customer)
    }

    pub fn list(&self) -> Vec<Customer> {
        self.customers.read().clone()
    }

    /// Customers still waiting to be served, in arrival order.
    pub fn waiting(&self) -> Vec<Customer> {
        self.customers
            .read()
            .iter()
            .filter(|c| c.status == QueueStatus::Waiting)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.customers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.read().is_empty()
    }
}
