//! Builder for creating and configuring Wizard sessions.

use std::time::Duration;

use super::Wizard;
use crate::{models::ProjectRecord, notify::NotificationSender};

/// Default bound on a single delivery attempt.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for creating and configuring Wizard sessions.
#[derive(Debug, Clone)]
pub struct WizardBuilder<S> {
    sender: S,
    submit_timeout: Duration,
    record: Option<ProjectRecord>,
}

impl<S: NotificationSender> WizardBuilder<S> {
    /// Creates a new builder delivering through `sender`.
    pub fn new(sender: S) -> Self {
        Self {
            sender,
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
            record: None,
        }
    }

    /// Sets how long a delivery may take before it counts as failed.
    ///
    /// If not specified, uses [`DEFAULT_SUBMIT_TIMEOUT`].
    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = timeout;
        self
    }

    /// Starts the session from an existing record instead of a blank one,
    /// e.g. one loaded from disk. The session still begins on step 1.
    pub fn with_record(mut self, record: ProjectRecord) -> Self {
        self.record = Some(record);
        self
    }

    /// Builds the configured wizard session.
    pub fn build(self) -> Wizard<S> {
        Wizard::new(
            self.sender,
            self.submit_timeout,
            self.record.unwrap_or_default(),
        )
    }
}
