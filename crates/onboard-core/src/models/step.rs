//! The four fixed wizard steps.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::Field;
use crate::error::{OnboardError, Result};

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 4;

/// One of the four stages of the onboarding wizard.
///
/// Each step owns a disjoint subset of the record's fields; [`WizardStep::Review`]
/// owns none and only presents the record before submission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Contact details and industry
    #[default]
    BasicInfo,

    /// Look and feel of the website
    Preferences,

    /// Existing site, budget, timeline and description
    Requirements,

    /// Read-only summary before submission
    Review,
}

impl WizardStep {
    /// All steps in order.
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::Preferences,
        WizardStep::Requirements,
        WizardStep::Review,
    ];

    /// Convert a 1-based step number.
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1 => Ok(Self::BasicInfo),
            2 => Ok(Self::Preferences),
            3 => Ok(Self::Requirements),
            4 => Ok(Self::Review),
            _ => Err(OnboardError::InvalidStep { number }),
        }
    }

    /// The 1-based step number.
    pub fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Preferences => 2,
            Self::Requirements => 3,
            Self::Review => 4,
        }
    }

    /// Human-readable label shown in the step indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Preferences => "Preferences",
            Self::Requirements => "Requirements",
            Self::Review => "Review",
        }
    }

    /// The following step, or `None` on the last one.
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1).ok()
    }

    /// The preceding step, or `None` on the first one.
    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1)).ok()
    }

    pub fn is_last(self) -> bool {
        self == Self::Review
    }

    /// Fields edited on this step.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::BasicInfo => &[
                Field::FullName,
                Field::BusinessName,
                Field::Email,
                Field::Phone,
                Field::Location,
                Field::BusinessType,
                Field::OtherBusinessType,
            ],
            Self::Preferences => &[
                Field::WebsiteStyle,
                Field::PrimaryColor,
                Field::LayoutPreference,
                Field::Features,
            ],
            Self::Requirements => &[
                Field::HasWebsite,
                Field::CurrentUrl,
                Field::Budget,
                Field::Timeline,
                Field::Description,
            ],
            Self::Review => &[],
        }
    }
}

impl FromStr for WizardStep {
    type Err = OnboardError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::from_number(number);
        }
        Self::ALL
            .into_iter()
            .find(|step| step.label().eq_ignore_ascii_case(trimmed))
            .ok_or(OnboardError::InvalidStep { number: 0 })
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
