//! Submission status of a wizard session.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of session statuses.
///
/// `Success` is terminal until the session is reset; `Error` is recoverable
/// through a retry or by cancelling back to `Idle`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Collecting data, nothing in flight
    #[default]
    Idle,

    /// Waiting for the notification sender
    Submitting,

    /// Record delivered
    Success,

    /// Last delivery attempt failed
    Error,
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(SessionStatus::Idle),
            "submitting" => Ok(SessionStatus::Submitting),
            "success" => Ok(SessionStatus::Success),
            "error" => Ok(SessionStatus::Error),
            _ => Err(format!("Invalid session status: {s}")),
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Submitting => "submitting",
            SessionStatus::Success => "success",
            SessionStatus::Error => "error",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use onboard_core::models::SessionStatus;
    ///
    /// assert_eq!(SessionStatus::Success.with_icon(), "✓ Submitted");
    /// assert_eq!(SessionStatus::Error.with_icon(), "✗ Failed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "○ In Progress",
            SessionStatus::Submitting => "➤ Submitting",
            SessionStatus::Success => "✓ Submitted",
            SessionStatus::Error => "✗ Failed",
        }
    }
}
