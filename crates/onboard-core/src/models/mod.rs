//! Data models for the onboarding wizard.
//!
//! This module contains the record being built, the identifiers for its
//! fields and steps, the per-field error map and the session status. Display
//! implementations live in [`crate::display`] so presentation stays separate
//! from the data.
//!
//! # Examples
//!
//! ```rust
//! use onboard_core::models::{Field, HasWebsite, ProjectRecord, WizardStep};
//!
//! let mut record = ProjectRecord::default();
//! assert_eq!(record.primary_color, "#3b82f6");
//!
//! record.has_website = Some(HasWebsite::No);
//! assert_eq!(record.existing_site(), "No");
//!
//! assert!(WizardStep::Requirements.fields().contains(&Field::CurrentUrl));
//! ```

pub mod errors;
pub mod field;
pub mod record;
pub mod status;
pub mod step;


pub use errors::FieldErrors;
pub use field::Field;
pub use record::{HasWebsite, LayoutPreference, ProjectRecord};
pub use status::SessionStatus;
pub use step::{WizardStep, TOTAL_STEPS};
