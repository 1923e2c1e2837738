//! Static option sets offered by the wizard.
//!
//! These lists are read-only; the validator only checks that selections are
//! present, so callers may still store values outside the catalog (a free
//! text industry, for example).

/// Industry value that unlocks the `otherBusinessType` field.
pub const OTHER_BUSINESS_TYPE: &str = "Other";

/// Default `primaryColor` for a fresh record.
pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";

pub const BUSINESS_TYPES: &[&str] = &[
    "Roofing",
    "Real Estate",
    "Hotel / Hospitality",
    "Restaurant",
    "Pharmacy / Medical",
    "Construction",
    "E-commerce",
    "Legal",
    "Consulting",
    OTHER_BUSINESS_TYPE,
];

pub const WEBSITE_STYLES: &[&str] = &[
    "Modern",
    "Luxury",
    "Minimal",
    "Corporate",
    "Creative",
    "Professional",
    "E-commerce",
    "Bold",
    "Elegant",
];

pub const FEATURES: &[&str] = &[
    "Home Page",
    "About Us",
    "Services",
    "Contact Form",
    "Blog / News",
    "Booking System",
    "Online Payment",
    "Portfolio / Gallery",
    "Product Page",
    "Admin Dashboard",
    "Multi-language",
    "SEO Optimization",
];

pub const BUDGET_RANGES: &[&str] = &[
    "Under $1,000",
    "$1,000 - $3,000",
    "$3,000 - $5,000",
    "$5,000 - $10,000",
    "$10,000+",
];

pub const TIMELINES: &[&str] = &[
    "As soon as possible",
    "Within 2 weeks",
    "Within 1 month",
    "1-3 months",
    "Flexible",
];

/// Named option list, used when presenting choices for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionList {
    pub name: &'static str,
    pub options: &'static [&'static str],
}

/// Every catalog list in presentation order.
pub const ALL_LISTS: &[OptionList] = &[
    OptionList {
        name: "businessType",
        options: BUSINESS_TYPES,
    },
    OptionList {
        name: "websiteStyle",
        options: WEBSITE_STYLES,
    },
    OptionList {
        name: "layoutPreference",
        options: &["Single Page", "Multi-Page"],
    },
    OptionList {
        name: "features",
        options: FEATURES,
    },
    OptionList {
        name: "hasWebsite",
        options: &["Yes", "No"],
    },
    OptionList {
        name: "budget",
        options: BUDGET_RANGES,
    },
    OptionList {
        name: "timeline",
        options: TIMELINES,
    },
];

/// Looks up the option list for a field key (camelCase), if the field is a
/// selection.
pub fn options_for(name: &str) -> Option<&'static OptionList> {
    ALL_LISTS.iter().find(|list| list.name == name)
}

/// Case-insensitive match against a list, returning the canonical spelling.
pub fn canonical(options: &[&'static str], value: &str) -> Option<&'static str> {
    let value = value.trim();
    options
        .iter()
        .copied()
        .find(|option| option.eq_ignore_ascii_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_last_industry() {
        assert_eq!(BUSINESS_TYPES.last(), Some(&OTHER_BUSINESS_TYPE));
    }

    #[test]
    fn test_options_for_known_and_unknown() {
        assert_eq!(options_for("budget").map(|l| l.options), Some(BUDGET_RANGES));
        assert!(options_for("fullName").is_none());
    }

    #[test]
    fn test_canonical_ignores_case_and_padding() {
        assert_eq!(canonical(FEATURES, "  home page "), Some("Home Page"));
        assert_eq!(canonical(TIMELINES, "someday"), None);
    }
}
