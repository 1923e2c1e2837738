//! Per-step validation rules.
//!
//! Validation is a pure function of the step and the record: it never fails
//! and never mutates, it only reports which of the step's fields are invalid.
//! A step only inspects its own fields, so going back to an earlier step
//! never surfaces errors from a later one.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Field, FieldErrors, HasWebsite, ProjectRecord, WizardStep};

/// Loose `text@text.text` shape, matched anywhere in the input.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Message reported for an invalid field.
pub fn message_for(field: Field) -> &'static str {
    match field {
        Field::FullName => "Full name is required",
        Field::BusinessName => "Business name is required",
        Field::Email => "Valid email is required",
        Field::Phone => "Phone number is required",
        Field::Location => "Location is required",
        Field::BusinessType => "Please select a business type",
        Field::OtherBusinessType => "Please specify your business type",
        Field::WebsiteStyle => "Please select a preferred style",
        Field::PrimaryColor => "Please pick a primary color",
        Field::LayoutPreference => "Please select a layout preference",
        Field::Features => "Please select at least one feature",
        Field::HasWebsite => "Please answer this question",
        Field::CurrentUrl => "Please provide your current URL",
        Field::Budget => "Please select a budget range",
        Field::Timeline => "Please select a timeline",
        Field::Description => "Please provide a brief description",
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates the fields owned by `step`.
///
/// An empty map means the step is valid. [`WizardStep::Review`] has no
/// fields of its own and always validates.
///
/// # Examples
///
/// ```rust
/// use onboard_core::{models::{Field, ProjectRecord, WizardStep}, validate};
///
/// let mut record = ProjectRecord::default();
/// record.email = "not-an-email".to_string();
///
/// let errors = validate(WizardStep::BasicInfo, &record);
/// assert_eq!(errors.get(Field::Email), Some("Valid email is required"));
/// assert!(validate(WizardStep::Review, &record).is_empty());
/// ```
pub fn validate(step: WizardStep, record: &ProjectRecord) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut check = |field: Field, invalid: bool| {
        if invalid {
            errors.insert(field, message_for(field));
        }
    };

    match step {
        WizardStep::BasicInfo => {
            check(Field::FullName, blank(&record.full_name));
            check(Field::BusinessName, blank(&record.business_name));
            check(
                Field::Email,
                blank(&record.email) || !EMAIL_SHAPE.is_match(&record.email),
            );
            check(Field::Phone, blank(&record.phone));
            check(Field::Location, blank(&record.location));
            check(Field::BusinessType, record.business_type.is_empty());
            check(
                Field::OtherBusinessType,
                record.is_other_business_type() && blank(&record.other_business_type),
            );
        }
        WizardStep::Preferences => {
            check(Field::WebsiteStyle, record.website_style.is_empty());
            check(Field::LayoutPreference, record.layout_preference.is_none());
            check(Field::Features, record.features.is_empty());
        }
        WizardStep::Requirements => {
            check(Field::HasWebsite, record.has_website.is_none());
            check(
                Field::CurrentUrl,
                record.has_website == Some(HasWebsite::Yes) && blank(&record.current_url),
            );
            check(Field::Budget, record.budget.is_empty());
            check(Field::Timeline, record.timeline.is_empty());
            check(Field::Description, blank(&record.description));
        }
        WizardStep::Review => {}
    }

    errors
}

/// Validates every data-entry step at once.
///
/// Used where there is no step history to walk, such as a record loaded
/// from a file.
pub fn validate_all(record: &ProjectRecord) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for step in WizardStep::ALL {
        errors.extend(validate(step, record));
    }
    errors
}
