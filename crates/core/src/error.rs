//! Error types for Project Drawer
//!
//! This module provides unified error handling for the drawer and its
//! collaborators: permission denials, form validation, persistence failures
//! and configuration loading.

use crate::types::{PermissionAction, ProjectId};
use thiserror::Error;

/// The main error type for Project Drawer
#[derive(Debug, Error)]
pub enum DrawerError {
    // ========================================================================
    // Locally Recovered Errors
    // ========================================================================
    /// The capability predicate refused the action
    #[error("Permission denied for action '{action}'")]
    PermissionDenied { action: PermissionAction },

    /// A form field failed validation
    #[error("Field validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// A submission is already in flight for this drawer
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// Submit was attempted before an account context was set
    #[error("No account context set")]
    MissingAccount,

    // ========================================================================
    // Persistence Errors
    // ========================================================================
    /// The backing store rejected or failed the call
    #[error("Persistence failed: {0}")]
    Persistence(String),

    /// Project not found in the backing store
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    /// The drawer was dropped before the persistence call resolved
    #[error("Drawer was dropped before the submission completed")]
    Detached,

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DrawerError {
    /// Create a field validation error
    pub fn validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        DrawerError::Validation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        DrawerError::Persistence(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DrawerError::Internal(msg.into())
    }

    /// Check if this error was handled inside the drawer without touching the backend
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DrawerError::PermissionDenied { .. }
                | DrawerError::Validation { .. }
                | DrawerError::SubmissionInFlight
                | DrawerError::MissingAccount
        )
    }

    /// Check if this error came back from the persistence service
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            DrawerError::Persistence(_) | DrawerError::NotFound(_)
        )
    }
}

/// Result type alias using DrawerError
pub type DrawerResult<T> = Result<T, DrawerError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error() {
        let err = DrawerError::validation("name", "Name is required");
        assert!(err.is_recoverable());
        assert!(!err.is_persistence());
        assert_eq!(
            err.to_string(),
            "Field validation failed for 'name': Name is required"
        );
    }

    #[test]
    fn test_permission_denied_error() {
        let err = DrawerError::PermissionDenied {
            action: PermissionAction::UpdateProject,
        };
        assert!(err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "Permission denied for action 'UpdateProjectInfo'"
        );
    }

    #[test]
    fn test_persistence_errors() {
        let err = DrawerError::persistence("connection reset");
        assert!(err.is_persistence());
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Persistence failed: connection reset");

        let err = DrawerError::NotFound(ProjectId::new(3));
        assert!(err.is_persistence());
        assert_eq!(err.to_string(), "Project not found: 3");
    }

    #[test]
    fn test_detached_is_neither() {
        let err = DrawerError::Detached;
        assert!(!err.is_recoverable());
        assert!(!err.is_persistence());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DrawerError = json_err.into();
        assert!(err.to_string().starts_with("JSON serialization error"));
    }
}
