//! Collection wrapper types for displaying catalog lists.

use std::fmt;

use crate::catalog::{ALL_LISTS, OptionList};

/// Newtype wrapper for displaying one or more catalog lists.
///
/// Each list renders as a heading with its field key followed by one bullet
/// per option. Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use onboard_core::{catalog, display::OptionLists};
///
/// let list = catalog::options_for("budget").unwrap();
/// let output = OptionLists(vec![list]).to_string();
/// assert!(output.contains("### budget"));
/// assert!(output.contains("- $10,000+"));
/// ```
pub struct OptionLists(pub Vec<&'static OptionList>);

impl OptionLists {
    /// Every list in the catalog.
    pub fn all() -> Self {
        Self(ALL_LISTS.iter().collect())
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of lists in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the lists.
    pub fn iter(&self) -> std::slice::Iter<'_, &'static OptionList> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a OptionLists {
    type Item = &'a &'static OptionList;
    type IntoIter = std::slice::Iter<'a, &'static OptionList>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for OptionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.name)?;
        writeln!(f)?;
        for option in self.options {
            writeln!(f, "- {option}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for OptionLists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No option lists found.")
        } else {
            for list in &self.0 {
                write!(f, "{list}")?;
            }
            Ok(())
        }
    }
}
