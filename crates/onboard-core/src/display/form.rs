//! The current step rendered as a form.

use std::fmt;

use super::StepIndicator;
use crate::models::{Field, FieldErrors, HasWebsite, ProjectRecord, WizardStep};

/// One step of the wizard with its fields, current values and errors.
///
/// The review step renders the full review page instead of inputs.
///
/// # Examples
///
/// ```rust
/// use onboard_core::{
///     display::StepForm,
///     models::{Field, FieldErrors, ProjectRecord, WizardStep},
/// };
///
/// let record = ProjectRecord::default();
/// let mut errors = FieldErrors::new();
/// errors.insert(Field::Email, "Valid email is required");
///
/// let output = StepForm::new(WizardStep::BasicInfo, &record, &errors).to_string();
/// assert!(output.contains("- **Email Address** (`email`): -"));
/// assert!(output.contains("  - ⚠ Valid email is required"));
/// ```
pub struct StepForm<'a> {
    step: WizardStep,
    record: &'a ProjectRecord,
    errors: &'a FieldErrors,
}

impl<'a> StepForm<'a> {
    pub fn new(step: WizardStep, record: &'a ProjectRecord, errors: &'a FieldErrors) -> Self {
        Self {
            step,
            record,
            errors,
        }
    }

    fn is_visible(&self, field: Field) -> bool {
        match field {
            Field::OtherBusinessType => self.record.is_other_business_type(),
            Field::CurrentUrl => self.record.has_website == Some(HasWebsite::Yes),
            _ => true,
        }
    }
}

impl fmt::Display for StepForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", StepIndicator::new(self.step))?;
        writeln!(f)?;

        if self.step == WizardStep::Review {
            return write!(f, "{}", self.record);
        }

        writeln!(f, "## {}", self.step.label())?;
        writeln!(f)?;
        for field in self.step.fields().iter().copied() {
            if !self.is_visible(field) {
                continue;
            }

            let value = self.record.value_of(field);
            let value = if value.is_empty() { "-" } else { value.as_str() };
            writeln!(f, "- **{}** (`{}`): {value}", field.label(), field.as_str())?;
            if let Some(message) = self.errors.get(field) {
                writeln!(f, "  - ⚠ {message}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditional_fields_hidden_until_relevant() {
        let mut record = ProjectRecord::default();
        let errors = FieldErrors::new();

        let output = StepForm::new(WizardStep::BasicInfo, &record, &errors).to_string();
        assert!(!output.contains("otherBusinessType"));

        record.business_type = "Other".to_string();
        let output = StepForm::new(WizardStep::BasicInfo, &record, &errors).to_string();
        assert!(output.contains("(`otherBusinessType`)"));

        let output = StepForm::new(WizardStep::Requirements, &record, &errors).to_string();
        assert!(!output.contains("currentUrl"));

        record.has_website = Some(HasWebsite::Yes);
        let output = StepForm::new(WizardStep::Requirements, &record, &errors).to_string();
        assert!(output.contains("(`currentUrl`)"));
    }

    #[test]
    fn test_preferences_form_values() {
        let mut record = ProjectRecord::default();
        record.toggle_feature("Services");
        record.toggle_feature("About Us");
        let errors = FieldErrors::new();

        let output = StepForm::new(WizardStep::Preferences, &record, &errors).to_string();
        assert!(output.starts_with("Step 2 of 4: Preferences"));
        assert!(output.contains("## Preferences"));
        assert!(output.contains("(`primaryColor`): #3b82f6"));
        assert!(output.contains("(`features`): About Us, Services"));
    }

    #[test]
    fn test_review_step_shows_summary() {
        let record = ProjectRecord::default();
        let errors = FieldErrors::new();

        let output = StepForm::new(WizardStep::Review, &record, &errors).to_string();
        assert!(output.contains("## Review & Submit"));
        assert!(!output.contains("(`"));
    }
}
