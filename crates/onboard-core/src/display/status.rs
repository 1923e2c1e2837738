//! Status and confirmation message types for session feedback.

use std::fmt;

use crate::models::{ProjectRecord, SessionStatus};

/// Wrapper type for displaying command confirmation messages.
///
/// This provides consistent formatting for commands that change the session
/// without producing a page of their own.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

/// Banner describing where the submission stands.
///
/// `Success` thanks the user by first name; `Error` asks them to retry or
/// go back. `Idle` renders nothing.
pub struct StatusBanner<'a> {
    status: SessionStatus,
    record: &'a ProjectRecord,
}

impl<'a> StatusBanner<'a> {
    pub fn new(status: SessionStatus, record: &'a ProjectRecord) -> Self {
        Self { status, record }
    }
}

impl fmt::Display for StatusBanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            SessionStatus::Idle => Ok(()),
            SessionStatus::Submitting => writeln!(f, "*Submitting your project details...*"),
            SessionStatus::Success => {
                writeln!(f, "## Submission Successful!")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "Thank you, {}. We have received your project details and will be in touch shortly.",
                    self.record.first_name()
                )?;
                writeln!(f)?;
                writeln!(f, "Use `reset` to submit another project.")
            }
            SessionStatus::Error => {
                writeln!(f, "## Submission Failed")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "Something went wrong while sending your data. Please check your connection and try again."
                )?;
                writeln!(f)?;
                writeln!(f, "Use `retry` to try again or `cancel` to go back.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Field updated".to_string());
        assert_eq!(format!("{success}"), "Success: Field updated\n");

        let failure = OperationStatus::failure("Unknown command".to_string());
        assert!(format!("{failure}").contains("Error:"));
    }

    #[test]
    fn test_banner_success_uses_first_name() {
        let record = ProjectRecord {
            full_name: "Jane Q Doe".to_string(),
            ..Default::default()
        };
        let output = StatusBanner::new(SessionStatus::Success, &record).to_string();

        assert!(output.contains("Submission Successful!"));
        assert!(output.contains("Thank you, Jane. We have received your project details"));
    }

    #[test]
    fn test_banner_error_and_idle() {
        let record = ProjectRecord::default();

        let error = StatusBanner::new(SessionStatus::Error, &record).to_string();
        assert!(error.contains("Submission Failed"));
        assert!(error.contains("Please check your connection and try again."));

        let idle = StatusBanner::new(SessionStatus::Idle, &record).to_string();
        assert!(idle.is_empty());
    }
}
