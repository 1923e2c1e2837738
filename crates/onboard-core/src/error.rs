//! Error types for the onboarding library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{FieldErrors, SessionStatus, WizardStep};

/// Comprehensive error type for all onboarding operations.
#[derive(Error, Debug)]
pub enum OnboardError {
    /// The active step has invalid fields; the offending fields are carried
    /// along so callers can present them without reading the wizard again
    #[error("Step {step} has {} invalid field(s)", errors.len())]
    Validation {
        step: WizardStep,
        errors: FieldErrors,
    },
    /// Step number outside 1..=4
    #[error("Invalid step number {number}, must be between 1 and 4")]
    InvalidStep { number: u8 },
    /// Field name that does not belong to the record
    #[error("Unknown field '{name}'")]
    UnknownField { name: String },
    /// Value rejected while building a record update
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
    /// A submission is already in flight for this session
    #[error("A submission is already in progress")]
    SubmissionInProgress,
    /// The session already delivered its record; only reset leaves this state
    #[error("This session has already been submitted")]
    AlreadySubmitted,
    /// Status transition that the session state machine does not allow
    #[error("Cannot {action} while status is {from}")]
    InvalidTransition {
        from: SessionStatus,
        action: &'static str,
    },
    /// Failure reported by a notification sender
    #[error("Notification failed: {message}")]
    Notification { message: String },
    /// Notification sender did not resolve within the configured bound
    #[error("Notification timed out after {seconds}s")]
    Timeout { seconds: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating invalid value errors.
pub struct InvalidValueBuilder {
    field: String,
}

impl InvalidValueBuilder {
    /// Create a new invalid value error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> OnboardError {
        OnboardError::InvalidValue {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl OnboardError {
    /// Creates a builder for invalid value errors.
    pub fn invalid_value(field: impl Into<String>) -> InvalidValueBuilder {
        InvalidValueBuilder::new(field)
    }

    /// Wraps any sender-side failure into an opaque notification error.
    pub fn notification(message: impl Into<String>) -> Self {
        OnboardError::Notification {
            message: message.into(),
        }
    }
}

/// Extension trait for io Results that attaches the offending path.
pub trait FsResultExt<T> {
    /// Map io errors to `OnboardError::FileSystem` at `path`.
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> FsResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| OnboardError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Result type alias for onboarding operations
pub type Result<T> = std::result::Result<T, OnboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn test_validation_error_counts_fields() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "Valid email is required");
        errors.insert(Field::Phone, "Phone number is required");

        let err = OnboardError::Validation {
            step: WizardStep::BasicInfo,
            errors,
        };
        assert_eq!(err.to_string(), "Step 1 has 2 invalid field(s)");
    }

    #[test]
    fn test_invalid_value_builder() {
        let err = OnboardError::invalid_value("hasWebsite").with_reason("expected Yes or No");
        match err {
            OnboardError::InvalidValue { field, reason } => {
                assert_eq!(field, "hasWebsite");
                assert_eq!(reason, "expected Yes or No");
            }
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = OnboardError::InvalidTransition {
            from: SessionStatus::Idle,
            action: "retry submission",
        };
        assert_eq!(err.to_string(), "Cannot retry submission while status is idle");
    }

    #[test]
    fn test_fs_context_keeps_path() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = result.fs_context("/tmp/outbox").unwrap_err();
        assert!(err.to_string().contains("/tmp/outbox"));
    }
}
