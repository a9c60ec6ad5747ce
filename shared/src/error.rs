//! Error types for the team calendar permission layer.

use serde::Serialize;
use thiserror::Error;

use crate::role::{Permission, Role};

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// A permission check failed.
///
/// Carries the permission that was required and the role the caller held, so
/// API handlers and UI guards can report the denial without parsing the message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct PermissionError {
    pub message: String,
    pub required_permission: Permission,
    pub user_role: Role,
}

impl PermissionError {
    pub fn new(required_permission: Permission, user_role: Role) -> Self {
        Self {
            message: format!(
                "Permission denied: {} role lacks {}",
                user_role, required_permission
            ),
            required_permission,
            user_role,
        }
    }

    /// Replace the default message, keeping the structured fields.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// Errors that can occur while authorizing a team calendar request.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Caller has no role in the team
    #[error("Not a member of team {team_id}")]
    NotMember { team_id: String },

    /// Caller's role lacks the required permission
    #[error(transparent)]
    PermissionDenied(#[from] PermissionError),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::Auth(_) => 401,
            Error::NotMember { .. } | Error::PermissionDenied(_) => 403,
            Error::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// Machine-readable error code exposed in API bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Auth(_) => "UNAUTHENTICATED",
            Error::NotMember { .. } => "NOT_A_MEMBER",
            Error::PermissionDenied(_) => "PERMISSION_DENIED",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Config(_) => "CONFIG_ERROR",
            Error::Serialization(_) | Error::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
