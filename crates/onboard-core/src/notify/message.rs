//! Email body rendered from a finished record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Field, ProjectRecord};

/// Recipient name used on every notification.
pub const AGENCY_RECIPIENT: &str = "Agency Admin";

/// Template parameters for the outbound email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub to_name: String,
    pub from_name: String,
    pub message: String,
}

impl NotificationMessage {
    /// Renders the notification for `record`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use onboard_core::{models::ProjectRecord, notify::NotificationMessage};
    ///
    /// let record = ProjectRecord {
    ///     full_name: "Jane Doe".to_string(),
    ///     business_name: "Doe Bakes".to_string(),
    ///     ..Default::default()
    /// };
    /// let message = NotificationMessage::from_record(&record);
    /// assert_eq!(message.from_name, "Jane Doe");
    /// assert!(message.message.contains("Business: Doe Bakes"));
    /// ```
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            to_name: AGENCY_RECIPIENT.to_string(),
            from_name: record.full_name.clone(),
            message: MessageBody(record).to_string(),
        }
    }
}

struct MessageBody<'a>(&'a ProjectRecord);

impl fmt::Display for MessageBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;

        writeln!(f, "New Onboarding Submission:")?;
        writeln!(f)?;
        writeln!(f, "-- Basic Info --")?;
        writeln!(f, "Business: {}", r.business_name)?;
        writeln!(f, "Email: {}", r.email)?;
        writeln!(f, "Phone: {}", r.phone)?;
        writeln!(f, "Location: {}", r.location)?;
        writeln!(f, "Type: {} ({})", r.business_type, r.other_business_type)?;
        writeln!(f)?;
        writeln!(f, "-- Preferences --")?;
        writeln!(f, "Style: {}", r.website_style)?;
        writeln!(f, "Color: {}", r.primary_color)?;
        writeln!(f, "Layout: {}", r.value_of(Field::LayoutPreference))?;
        writeln!(f, "Features: {}", r.value_of(Field::Features))?;
        writeln!(f)?;
        writeln!(f, "-- Requirements --")?;
        writeln!(
            f,
            "Existing Site: {} ({})",
            r.value_of(Field::HasWebsite),
            r.current_url
        )?;
        writeln!(f, "Budget: {}", r.budget)?;
        writeln!(f, "Timeline: {}", r.timeline)?;
        writeln!(f)?;
        writeln!(f, "-- Description --")?;
        writeln!(f, "{}", r.description)
    }
}

impl fmt::Display for NotificationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "To: {}", self.to_name)?;
        writeln!(f, "From: {}", self.from_name)?;
        writeln!(f)?;
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HasWebsite, LayoutPreference};

    fn sample_record() -> ProjectRecord {
        let mut record = ProjectRecord {
            full_name: "Jane Doe".to_string(),
            business_name: "Doe Bakes".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-0100".to_string(),
            location: "NY".to_string(),
            business_type: "Other".to_string(),
            other_business_type: "Bakery".to_string(),
            website_style: "Modern".to_string(),
            layout_preference: Some(LayoutPreference::MultiPage),
            has_website: Some(HasWebsite::Yes),
            current_url: "https://doe.example".to_string(),
            budget: "$3,000 - $5,000".to_string(),
            timeline: "1-3 months".to_string(),
            description: "Online ordering".to_string(),
            ..Default::default()
        };
        record.features.insert("Services".to_string());
        record.features.insert("Home Page".to_string());
        record
    }

    #[test]
    fn test_message_sections() {
        let message = NotificationMessage::from_record(&sample_record());

        assert_eq!(message.to_name, "Agency Admin");
        assert_eq!(message.from_name, "Jane Doe");
        assert!(message.message.starts_with("New Onboarding Submission:"));
        assert!(message.message.contains("Type: Other (Bakery)"));
        assert!(message.message.contains("Color: #3b82f6"));
        assert!(message.message.contains("Layout: Multi-Page"));
        assert!(message.message.contains("Features: Home Page, Services"));
        assert!(message.message.contains("Existing Site: Yes (https://doe.example)"));
        assert!(message.message.contains("-- Description --\nOnline ordering\n"));
    }

    #[test]
    fn test_message_with_unset_choices() {
        let message = NotificationMessage::from_record(&ProjectRecord::default());
        assert!(message.message.contains("Layout: \n"));
        assert!(message.message.contains("Existing Site:  ()"));
        assert!(message.message.contains("Features: \n"));
    }

    #[test]
    fn test_display_includes_headers() {
        let output = NotificationMessage::from_record(&sample_record()).to_string();
        assert!(output.starts_with("To: Agency Admin\nFrom: Jane Doe\n\n"));
    }
}
