//! Field identifiers for the onboarding record.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::OnboardError;

/// One field of [`super::ProjectRecord`].
///
/// Variants are declared in form order, so ordered collections keyed by
/// `Field` list errors the way the form presents them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    BusinessName,
    Email,
    Phone,
    Location,
    BusinessType,
    OtherBusinessType,
    WebsiteStyle,
    PrimaryColor,
    LayoutPreference,
    Features,
    HasWebsite,
    CurrentUrl,
    Budget,
    Timeline,
    Description,
}

impl Field {
    pub const ALL: [Field; 16] = [
        Field::FullName,
        Field::BusinessName,
        Field::Email,
        Field::Phone,
        Field::Location,
        Field::BusinessType,
        Field::OtherBusinessType,
        Field::WebsiteStyle,
        Field::PrimaryColor,
        Field::LayoutPreference,
        Field::Features,
        Field::HasWebsite,
        Field::CurrentUrl,
        Field::Budget,
        Field::Timeline,
        Field::Description,
    ];

    /// Canonical key, as used in error maps and serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::BusinessName => "businessName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Location => "location",
            Field::BusinessType => "businessType",
            Field::OtherBusinessType => "otherBusinessType",
            Field::WebsiteStyle => "websiteStyle",
            Field::PrimaryColor => "primaryColor",
            Field::LayoutPreference => "layoutPreference",
            Field::Features => "features",
            Field::HasWebsite => "hasWebsite",
            Field::CurrentUrl => "currentUrl",
            Field::Budget => "budget",
            Field::Timeline => "timeline",
            Field::Description => "description",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::BusinessName => "Business Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Location => "Location",
            Field::BusinessType => "Business Industry",
            Field::OtherBusinessType => "Please Specify",
            Field::WebsiteStyle => "Desired Website Style",
            Field::PrimaryColor => "Primary Color",
            Field::LayoutPreference => "Layout Preference",
            Field::Features => "Features",
            Field::HasWebsite => "Do you have a website?",
            Field::CurrentUrl => "Current Website URL",
            Field::Budget => "Project Budget",
            Field::Timeline => "Desired Timeline",
            Field::Description => "Detailed Project Description",
        }
    }
}

impl FromStr for Field {
    type Err = OnboardError;

    /// Accepts the canonical camelCase key as well as snake_case or
    /// kebab-case spellings, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        Field::ALL
            .into_iter()
            .find(|field| field.as_str().to_lowercase() == normalized)
            .ok_or_else(|| OnboardError::UnknownField {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
