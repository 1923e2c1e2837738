//! The onboarding record accumulated across the wizard steps.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::Field;
use crate::catalog::{DEFAULT_PRIMARY_COLOR, OTHER_BUSINESS_TYPE};

/// Preferred site layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutPreference {
    #[serde(rename = "Single Page")]
    SinglePage,
    #[serde(rename = "Multi-Page")]
    MultiPage,
}

impl LayoutPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutPreference::SinglePage => "Single Page",
            LayoutPreference::MultiPage => "Multi-Page",
        }
    }
}

impl FromStr for LayoutPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "singlepage" | "single" => Ok(LayoutPreference::SinglePage),
            "multipage" | "multi" => Ok(LayoutPreference::MultiPage),
            _ => Err(format!("Invalid layout preference: {s}")),
        }
    }
}

impl fmt::Display for LayoutPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Answer to "do you already have a website?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HasWebsite {
    Yes,
    No,
}

impl HasWebsite {
    pub fn as_str(&self) -> &'static str {
        match self {
            HasWebsite::Yes => "Yes",
            HasWebsite::No => "No",
        }
    }
}

impl FromStr for HasWebsite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(HasWebsite::Yes),
            "no" | "n" => Ok(HasWebsite::No),
            _ => Err(format!("Invalid answer: {s} (expected Yes or No)")),
        }
    }
}

impl fmt::Display for HasWebsite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serializes an unset choice as `""`, matching how the form stores it.
mod blank_choice {
    use std::{fmt, str::FromStr};

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: fmt::Display,
        S: Serializer,
    {
        match value {
            Some(choice) => serializer.collect_str(choice),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: fmt::Display,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(de::Error::custom)
    }
}

/// The structured submission built across the four steps.
///
/// A fresh record has every text field empty, no selections and the default
/// primary color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    // Step 1: basic info
    pub full_name: String,
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Catalog industry, "Other", or free text
    pub business_type: String,
    /// Only meaningful when `business_type` is "Other"
    pub other_business_type: String,

    // Step 2: preferences
    pub website_style: String,
    pub primary_color: String,
    #[serde(with = "blank_choice")]
    pub layout_preference: Option<LayoutPreference>,
    pub features: BTreeSet<String>,

    // Step 3: requirements
    #[serde(with = "blank_choice")]
    pub has_website: Option<HasWebsite>,
    /// Only meaningful when `has_website` is `Yes`
    pub current_url: String,
    pub budget: String,
    pub timeline: String,
    pub description: String,
}

impl Default for ProjectRecord {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            business_name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            business_type: String::new(),
            other_business_type: String::new(),
            website_style: String::new(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            layout_preference: None,
            features: BTreeSet::new(),
            has_website: None,
            current_url: String::new(),
            budget: String::new(),
            timeline: String::new(),
            description: String::new(),
        }
    }
}

impl ProjectRecord {
    pub fn is_other_business_type(&self) -> bool {
        self.business_type == OTHER_BUSINESS_TYPE
    }

    /// Industry as presented on review: the free text when "Other" was
    /// picked, else the selection.
    pub fn industry(&self) -> &str {
        if self.is_other_business_type() {
            &self.other_business_type
        } else {
            &self.business_type
        }
    }

    /// Existing-site answer as presented on review: the URL for "Yes",
    /// otherwise "No".
    pub fn existing_site(&self) -> &str {
        match self.has_website {
            Some(HasWebsite::Yes) => &self.current_url,
            _ => "No",
        }
    }

    /// Selects `feature` if absent, deselects it if present. Returns whether
    /// the feature is selected afterwards.
    pub fn toggle_feature(&mut self, feature: &str) -> bool {
        if self.features.remove(feature) {
            false
        } else {
            self.features.insert(feature.to_string());
            true
        }
    }

    /// Current value of `field` as text; unset choices are empty and
    /// features are comma-joined.
    pub fn value_of(&self, field: Field) -> String {
        match field {
            Field::FullName => self.full_name.clone(),
            Field::BusinessName => self.business_name.clone(),
            Field::Email => self.email.clone(),
            Field::Phone => self.phone.clone(),
            Field::Location => self.location.clone(),
            Field::BusinessType => self.business_type.clone(),
            Field::OtherBusinessType => self.other_business_type.clone(),
            Field::WebsiteStyle => self.website_style.clone(),
            Field::PrimaryColor => self.primary_color.clone(),
            Field::LayoutPreference => self
                .layout_preference
                .map(|layout| layout.as_str().to_string())
                .unwrap_or_default(),
            Field::Features => self
                .features
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            Field::HasWebsite => self
                .has_website
                .map(|answer| answer.as_str().to_string())
                .unwrap_or_default(),
            Field::CurrentUrl => self.current_url.clone(),
            Field::Budget => self.budget.clone(),
            Field::Timeline => self.timeline.clone(),
            Field::Description => self.description.clone(),
        }
    }

    /// First word of the full name, used to greet the user.
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or_default()
    }
}
