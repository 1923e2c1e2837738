//! Step indicator shown above every form.

use std::fmt;

use crate::models::{TOTAL_STEPS, WizardStep};

/// Renders the position in the wizard, e.g. `Step 2 of 4: Preferences`,
/// followed by one marker per step: `✓` done, `➤` current, `○` ahead.
#[derive(Debug, Clone, Copy)]
pub struct StepIndicator {
    current: WizardStep,
}

impl StepIndicator {
    pub fn new(current: WizardStep) -> Self {
        Self { current }
    }

    fn marker(&self, step: WizardStep) -> &'static str {
        match step.number().cmp(&self.current.number()) {
            std::cmp::Ordering::Less => "✓",
            std::cmp::Ordering::Equal => "➤",
            std::cmp::Ordering::Greater => "○",
        }
    }
}

impl fmt::Display for StepIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Step {} of {TOTAL_STEPS}: {}",
            self.current.number(),
            self.current.label()
        )?;
        writeln!(f)?;

        let markers: Vec<String> = WizardStep::ALL
            .iter()
            .map(|step| format!("{} {}. {}", self.marker(*step), step.number(), step.label()))
            .collect();
        writeln!(f, "{}", markers.join("  "))
    }
}
