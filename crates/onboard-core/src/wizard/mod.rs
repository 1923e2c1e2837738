//! The wizard controller: one user's pass through the four steps.
//!
//! A [`Wizard`] owns the record, the error map, the current step and the
//! submission status. Field edits clear their own error immediately without
//! re-validating; the step is only re-checked on the next `advance` or
//! `submit`.
//!
//! ```text
//!            submit (valid)            ok
//!   Idle ─────────────────▶ Submitting ───▶ Success ──reset──▶ Idle
//!    ▲                          │ fail / timeout
//!    │ cancel_error             ▼
//!    └──────────────────────  Error ──retry_submit──▶ Submitting
//! ```

mod builder;

use std::time::Duration;

use log::{debug, info, warn};

use crate::{
    error::{OnboardError, Result},
    models::{Field, FieldErrors, ProjectRecord, SessionStatus, WizardStep},
    notify::NotificationSender,
    params::RecordUpdate,
    validator::validate,
};

pub use builder::{WizardBuilder, DEFAULT_SUBMIT_TIMEOUT};

/// One onboarding session.
#[derive(Debug)]
pub struct Wizard<S> {
    sender: S,
    submit_timeout: Duration,
    record: ProjectRecord,
    errors: FieldErrors,
    current_step: WizardStep,
    status: SessionStatus,
}

impl<S: NotificationSender> Wizard<S> {
    fn new(sender: S, submit_timeout: Duration, record: ProjectRecord) -> Self {
        Self {
            sender,
            submit_timeout,
            record,
            errors: FieldErrors::new(),
            current_step: WizardStep::BasicInfo,
            status: SessionStatus::Idle,
        }
    }

    /// Starts configuring a session that delivers through `sender`.
    pub fn builder(sender: S) -> WizardBuilder<S> {
        WizardBuilder::new(sender)
    }

    pub fn record(&self) -> &ProjectRecord {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    pub fn submit_timeout(&self) -> Duration {
        self.submit_timeout
    }

    /// Merges `update` into the record and drops the error of every field it
    /// touches.
    pub fn update_fields(&mut self, update: RecordUpdate) {
        for field in update.touched_fields() {
            self.errors.remove(field);
        }
        update.apply_to(&mut self.record);
    }

    /// Parses `value` for `field` and applies it as a single-field update.
    ///
    /// # Errors
    ///
    /// * `OnboardError::InvalidValue` - value not allowed for the field; the
    ///   record and error map are left untouched
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
        let update = RecordUpdate::parse(field, value)?;
        self.update_fields(update);
        Ok(())
    }

    /// Selects or deselects one feature. Returns whether it is selected
    /// afterwards.
    pub fn toggle_feature(&mut self, feature: &str) -> bool {
        let mut features = self.record.features.clone();
        let selected = if features.remove(feature) {
            false
        } else {
            features.insert(feature.to_string());
            true
        };
        self.update_fields(RecordUpdate {
            features: Some(features),
            ..Default::default()
        });
        selected
    }

    /// Validates the current step and moves to the next one.
    ///
    /// On the review step this leaves the step unchanged; delivery happens
    /// through [`Wizard::submit`].
    ///
    /// # Errors
    ///
    /// * `OnboardError::Validation` - the current step has invalid fields;
    ///   they are also stored in [`Wizard::errors`] and the step is unchanged
    pub fn advance(&mut self) -> Result<WizardStep> {
        let step = self.current_step;
        let errors = validate(step, &self.record);
        if !errors.is_empty() {
            debug!("Step {step} blocked by {} invalid field(s)", errors.len());
            self.errors = errors.clone();
            return Err(OnboardError::Validation { step, errors });
        }

        if let Some(next) = step.next() {
            debug!("Advancing from step {step} to step {next}");
            self.current_step = next;
        }
        Ok(self.current_step)
    }

    /// Moves back one step, staying on the first. Errors are kept.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(previous) = self.current_step.previous() {
            debug!("Going back from step {} to step {previous}", self.current_step);
            self.current_step = previous;
        }
        self.current_step
    }

    /// Re-checks the requirements step and delivers the record.
    ///
    /// Returns the resulting status: `Success` when the sender resolved, or
    /// `Error` when it failed or did not answer within the submit timeout.
    ///
    /// # Errors
    ///
    /// The submission is refused, without contacting the sender, with:
    ///
    /// * `OnboardError::SubmissionInProgress` - status is `Submitting`
    /// * `OnboardError::AlreadySubmitted` - status is `Success`
    /// * `OnboardError::Validation` - the requirements step is invalid
    pub async fn submit(&mut self) -> Result<SessionStatus> {
        match self.status {
            SessionStatus::Submitting => return Err(OnboardError::SubmissionInProgress),
            SessionStatus::Success => return Err(OnboardError::AlreadySubmitted),
            SessionStatus::Idle | SessionStatus::Error => {}
        }

        let step = WizardStep::Requirements;
        let errors = validate(step, &self.record);
        if !errors.is_empty() {
            debug!("Submission blocked by {} invalid field(s)", errors.len());
            self.errors = errors.clone();
            return Err(OnboardError::Validation { step, errors });
        }

        self.deliver().await;
        Ok(self.status)
    }

    /// Tries the delivery again after a failure.
    ///
    /// # Errors
    ///
    /// * `OnboardError::InvalidTransition` - status is not `Error`
    /// * any refusal from [`Wizard::submit`]
    pub async fn retry_submit(&mut self) -> Result<SessionStatus> {
        if self.status != SessionStatus::Error {
            return Err(OnboardError::InvalidTransition {
                from: self.status,
                action: "retry submission",
            });
        }
        info!("Retrying submission");
        self.submit().await
    }

    /// Dismisses a failed delivery and returns to editing.
    ///
    /// # Errors
    ///
    /// * `OnboardError::InvalidTransition` - status is not `Error`
    pub fn cancel_error(&mut self) -> Result<()> {
        if self.status != SessionStatus::Error {
            return Err(OnboardError::InvalidTransition {
                from: self.status,
                action: "cancel",
            });
        }
        self.status = SessionStatus::Idle;
        Ok(())
    }

    /// Discards everything and starts over on step 1 with a blank record.
    pub fn reset(&mut self) {
        debug!("Resetting session");
        self.record = ProjectRecord::default();
        self.errors.clear();
        self.current_step = WizardStep::BasicInfo;
        self.status = SessionStatus::Idle;
    }

    async fn deliver(&mut self) {
        self.status = SessionStatus::Submitting;
        info!(
            "Submitting onboarding record for '{}'",
            self.record.business_name
        );

        let outcome = tokio::time::timeout(self.submit_timeout, self.sender.send(&self.record)).await;
        self.status = match outcome {
            Ok(Ok(())) => {
                info!("Submission delivered");
                SessionStatus::Success
            }
            Ok(Err(e)) => {
                warn!("Submission failed: {e}");
                SessionStatus::Error
            }
            Err(_) => {
                let e = OnboardError::Timeout {
                    seconds: self.submit_timeout.as_secs(),
                };
                warn!("Submission failed: {e}");
                SessionStatus::Error
            }
        };
    }
}
