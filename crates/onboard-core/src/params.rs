//! Parameter structures for wizard operations.
//!
//! [`RecordUpdate`] is the partial record accepted by
//! [`crate::Wizard::update_fields`]. It carries no interface-specific derives
//! beyond serde, so the CLI (or any other front end) builds one either field
//! by field or from a `field value` pair via [`RecordUpdate::parse`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{self, BUDGET_RANGES, FEATURES, TIMELINES, WEBSITE_STYLES},
    error::{OnboardError, Result},
    models::{Field, HasWebsite, LayoutPreference, ProjectRecord},
};

/// Partial set of record attributes; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordUpdate {
    pub full_name: Option<String>,
    pub business_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub business_type: Option<String>,
    pub other_business_type: Option<String>,
    pub website_style: Option<String>,
    pub primary_color: Option<String>,
    pub layout_preference: Option<LayoutPreference>,
    pub features: Option<BTreeSet<String>>,
    pub has_website: Option<HasWebsite>,
    pub current_url: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub description: Option<String>,
}

impl RecordUpdate {
    /// Fields this update sets, in form order.
    pub fn touched_fields(&self) -> Vec<Field> {
        let flags = [
            (Field::FullName, self.full_name.is_some()),
            (Field::BusinessName, self.business_name.is_some()),
            (Field::Email, self.email.is_some()),
            (Field::Phone, self.phone.is_some()),
            (Field::Location, self.location.is_some()),
            (Field::BusinessType, self.business_type.is_some()),
            (Field::OtherBusinessType, self.other_business_type.is_some()),
            (Field::WebsiteStyle, self.website_style.is_some()),
            (Field::PrimaryColor, self.primary_color.is_some()),
            (Field::LayoutPreference, self.layout_preference.is_some()),
            (Field::Features, self.features.is_some()),
            (Field::HasWebsite, self.has_website.is_some()),
            (Field::CurrentUrl, self.current_url.is_some()),
            (Field::Budget, self.budget.is_some()),
            (Field::Timeline, self.timeline.is_some()),
            (Field::Description, self.description.is_some()),
        ];
        flags
            .into_iter()
            .filter_map(|(field, set)| set.then_some(field))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.touched_fields().is_empty()
    }

    /// Merges the set attributes into `record`.
    pub fn apply_to(self, record: &mut ProjectRecord) {
        fn merge<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        merge(&mut record.full_name, self.full_name);
        merge(&mut record.business_name, self.business_name);
        merge(&mut record.email, self.email);
        merge(&mut record.phone, self.phone);
        merge(&mut record.location, self.location);
        merge(&mut record.business_type, self.business_type);
        merge(&mut record.other_business_type, self.other_business_type);
        merge(&mut record.website_style, self.website_style);
        merge(&mut record.primary_color, self.primary_color);
        if self.layout_preference.is_some() {
            record.layout_preference = self.layout_preference;
        }
        merge(&mut record.features, self.features);
        if self.has_website.is_some() {
            record.has_website = self.has_website;
        }
        merge(&mut record.current_url, self.current_url);
        merge(&mut record.budget, self.budget);
        merge(&mut record.timeline, self.timeline);
        merge(&mut record.description, self.description);
    }

    /// Builds a single-field update from text input.
    ///
    /// Selection fields are matched case-insensitively against the catalog
    /// and stored in their canonical spelling. `businessType` also accepts
    /// free text; `features` takes a comma-separated list that replaces the
    /// current selection.
    ///
    /// # Errors
    ///
    /// * `OnboardError::InvalidValue` - value not allowed for the field
    ///
    /// # Examples
    ///
    /// ```rust
    /// use onboard_core::{models::Field, params::RecordUpdate};
    ///
    /// let update = RecordUpdate::parse(Field::WebsiteStyle, "modern")?;
    /// assert_eq!(update.website_style.as_deref(), Some("Modern"));
    /// # onboard_core::Result::<()>::Ok(())
    /// ```
    pub fn parse(field: Field, value: &str) -> Result<Self> {
        let text = value.to_string();
        let mut update = RecordUpdate::default();

        match field {
            Field::FullName => update.full_name = Some(text),
            Field::BusinessName => update.business_name = Some(text),
            Field::Email => update.email = Some(text),
            Field::Phone => update.phone = Some(text),
            Field::Location => update.location = Some(text),
            Field::BusinessType => {
                let canonical = catalog::canonical(catalog::BUSINESS_TYPES, value)
                    .map(str::to_string)
                    .unwrap_or(text);
                update.business_type = Some(canonical);
            }
            Field::OtherBusinessType => update.other_business_type = Some(text),
            Field::WebsiteStyle => {
                update.website_style = Some(pick(field, WEBSITE_STYLES, value)?);
            }
            Field::PrimaryColor => update.primary_color = Some(parse_hex_color(value)?),
            Field::LayoutPreference => {
                let layout = value
                    .parse::<LayoutPreference>()
                    .map_err(|reason| OnboardError::invalid_value(field.as_str()).with_reason(reason))?;
                update.layout_preference = Some(layout);
            }
            Field::Features => {
                let features = value
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(|item| pick(field, FEATURES, item))
                    .collect::<Result<BTreeSet<_>>>()?;
                update.features = Some(features);
            }
            Field::HasWebsite => {
                let answer = value
                    .parse::<HasWebsite>()
                    .map_err(|reason| OnboardError::invalid_value(field.as_str()).with_reason(reason))?;
                update.has_website = Some(answer);
            }
            Field::CurrentUrl => update.current_url = Some(text),
            Field::Budget => update.budget = Some(pick(field, BUDGET_RANGES, value)?),
            Field::Timeline => update.timeline = Some(pick(field, TIMELINES, value)?),
            Field::Description => update.description = Some(text),
        }

        Ok(update)
    }
}

fn pick(field: Field, options: &[&'static str], value: &str) -> Result<String> {
    catalog::canonical(options, value)
        .map(str::to_string)
        .ok_or_else(|| {
            OnboardError::invalid_value(field.as_str())
                .with_reason(format!("'{}' is not one of: {}", value.trim(), options.join(", ")))
        })
}

fn parse_hex_color(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let valid_len = digits.len() == 3 || digits.len() == 6;
    if valid_len && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(format!("#{}", digits.to_lowercase()))
    } else {
        Err(OnboardError::invalid_value(Field::PrimaryColor.as_str())
            .with_reason(format!("'{trimmed}' is not a hex color like #3b82f6")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touched_fields_in_form_order() {
        let update = RecordUpdate {
            description: Some("Shop".to_string()),
            email: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(update.touched_fields(), vec![Field::Email, Field::Description]);
        assert!(RecordUpdate::default().is_empty());
    }

    #[test]
    fn test_apply_to_leaves_unset_fields() {
        let mut record = ProjectRecord {
            phone: "555-0100".to_string(),
            ..Default::default()
        };
        RecordUpdate {
            full_name: Some("Jane Doe".to_string()),
            has_website: Some(HasWebsite::Yes),
            ..Default::default()
        }
        .apply_to(&mut record);

        assert_eq!(record.full_name, "Jane Doe");
        assert_eq!(record.phone, "555-0100");
        assert_eq!(record.has_website, Some(HasWebsite::Yes));
        assert_eq!(record.primary_color, "#3b82f6");
    }

    #[test]
    fn test_parse_canonicalizes_catalog_values() {
        let update = RecordUpdate::parse(Field::Budget, "under $1,000").unwrap();
        assert_eq!(update.budget.as_deref(), Some("Under $1,000"));

        let update = RecordUpdate::parse(Field::BusinessType, "real estate").unwrap();
        assert_eq!(update.business_type.as_deref(), Some("Real Estate"));
    }

    #[test]
    fn test_parse_business_type_accepts_free_text() {
        let update = RecordUpdate::parse(Field::BusinessType, "Bakery").unwrap();
        assert_eq!(update.business_type.as_deref(), Some("Bakery"));
    }

    #[test]
    fn test_parse_rejects_unknown_style() {
        match RecordUpdate::parse(Field::WebsiteStyle, "Brutalist") {
            Err(OnboardError::InvalidValue { field, reason }) => {
                assert_eq!(field, "websiteStyle");
                assert!(reason.contains("Brutalist"));
            }
            other => panic!("Expected InvalidValue error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_features_list() {
        let update = RecordUpdate::parse(Field::Features, "home page, Services,,").unwrap();
        let features = update.features.unwrap();
        assert_eq!(features.len(), 2);
        assert!(features.contains("Home Page"));
        assert!(features.contains("Services"));

        assert!(RecordUpdate::parse(Field::Features, "Home Page, Teleporter").is_err());
    }

    #[test]
    fn test_parse_choices() {
        let update = RecordUpdate::parse(Field::LayoutPreference, "multi-page").unwrap();
        assert_eq!(update.layout_preference, Some(LayoutPreference::MultiPage));

        let update = RecordUpdate::parse(Field::HasWebsite, "yes").unwrap();
        assert_eq!(update.has_website, Some(HasWebsite::Yes));

        assert!(RecordUpdate::parse(Field::HasWebsite, "perhaps").is_err());
    }

    #[test]
    fn test_parse_primary_color() {
        let update = RecordUpdate::parse(Field::PrimaryColor, "FF0000").unwrap();
        assert_eq!(update.primary_color.as_deref(), Some("#ff0000"));
        assert!(RecordUpdate::parse(Field::PrimaryColor, "#12345").is_err());
        assert!(RecordUpdate::parse(Field::PrimaryColor, "blue").is_err());
    }

    #[test]
    fn test_parse_free_text_keeps_value_verbatim() {
        let update = RecordUpdate::parse(Field::Description, "  spaced  ").unwrap();
        assert_eq!(update.description.as_deref(), Some("  spaced  "));
    }
}
