//! Display implementations for domain models.
//!
//! The record renders as the review page shown on the last step; the error
//! map renders as a bullet list in form order.

use std::fmt;

use crate::models::{Field, FieldErrors, ProjectRecord};

/// Placeholder for an empty value on the review page.
const EMPTY_VALUE: &str = "-";

struct Value<'a>(&'a str);

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.trim().is_empty() {
            write!(f, "{EMPTY_VALUE}")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for ProjectRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Review & Submit")?;
        writeln!(f)?;

        writeln!(f, "### Basic Information")?;
        writeln!(f)?;
        writeln!(f, "- **Full Name**: {}", Value(&self.full_name))?;
        writeln!(f, "- **Business Name**: {}", Value(&self.business_name))?;
        writeln!(f, "- **Email**: {}", Value(&self.email))?;
        writeln!(f, "- **Phone**: {}", Value(&self.phone))?;
        writeln!(f, "- **Location**: {}", Value(&self.location))?;
        writeln!(f, "- **Industry**: {}", Value(self.industry()))?;
        writeln!(f)?;

        writeln!(f, "### Preferences")?;
        writeln!(f)?;
        writeln!(f, "- **Website Style**: {}", Value(&self.website_style))?;
        writeln!(
            f,
            "- **Layout**: {}",
            Value(&self.value_of(Field::LayoutPreference))
        )?;
        writeln!(f, "- **Color Preference**: {}", Value(&self.primary_color))?;
        if self.features.is_empty() {
            writeln!(f, "- **Features Needed**: None selected")?;
        } else {
            writeln!(f, "- **Features Needed**: {}", self.value_of(Field::Features))?;
        }
        writeln!(f)?;

        writeln!(f, "### Project Details")?;
        writeln!(f)?;
        writeln!(f, "- **Existing Website**: {}", Value(self.existing_site()))?;
        writeln!(f, "- **Budget**: {}", Value(&self.budget))?;
        writeln!(f, "- **Timeline**: {}", Value(&self.timeline))?;
        writeln!(f, "- **Description**: {}", Value(&self.description))?;

        Ok(())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, message) in self {
            writeln!(f, "- **{}**: {message}", field.label())?;
        }
        Ok(())
    }
}
