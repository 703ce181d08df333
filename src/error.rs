//! Unified application error model and mapping helpers.
//! This module provides a common error enum used across the console and the
//! registries, along with the mapping into user-facing notifications. No
//! error here is fatal; the front of house stays interactive after any of
//! them.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::directory::DirectoryError;
use crate::intake::IntakeError;
use crate::notify::Notification;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppError {
    UserInput { code: String, message: String },
    NotFound { code: String, message: String },
    Auth { code: String, message: String },
    Internal { code: String, message: String },
}

impl AppError {
    pub fn code_str(&self) -> &str {
        match self {
            AppError::UserInput { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Auth { code, .. }
            | AppError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::UserInput { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Auth { message, .. }
            | AppError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn user<S: Into<String>>(code: S, msg: S) -> Self { AppError::UserInput { code: code.into(), message: msg.into() } }
    pub fn not_found<S: Into<String>>(code: S, msg: S) -> Self { AppError::NotFound { code: code.into(), message: msg.into() } }
    pub fn auth<S: Into<String>>(code: S, msg: S) -> Self { AppError::Auth { code: code.into(), message: msg.into() } }
    pub fn internal<S: Into<String>>(code: S, msg: S) -> Self { AppError::Internal { code: code.into(), message: msg.into() } }

    /// Every application error surfaces as a destructive toast.
    pub fn notification(&self) -> Notification {
        Notification::error(self.message().to_string())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<DirectoryError> for AppError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::MissingFields => AppError::user("missing_fields", "Please fill in all fields"),
            DirectoryError::InvalidEmail => AppError::user("invalid_email", "Invalid email address"),
            DirectoryError::UnknownUser(_) => {
                AppError::not_found("unknown_user".to_string(), e.to_string())
            }
        }
    }
}

impl From<IntakeError> for AppError {
    fn from(e: IntakeError) -> Self {
        match e {
            IntakeError::MissingRequiredFields => {
                AppError::user("missing_required_fields", "Name and contact number are required")
            }
            IntakeError::InvalidEmail => AppError::user("invalid_email", "Invalid email address"),
        }
    }
}
