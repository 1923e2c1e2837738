//! Core library for the Onboard project-onboarding wizard.
//!
//! This crate holds the four-step form state machine: the field catalog, the
//! record accumulated across steps, the per-step validator, the wizard
//! controller and the seam through which a finished record is delivered.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): the record renders as the review page and
//!   the error map as a bullet list via [`std::fmt::Display`]
//! - **Display Wrappers** ([`display`]): step form, step indicator, status
//!   banner and catalog lists
//! - **Terminal Rendering**: markdown output via the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//!
//! use onboard_core::{
//!     Wizard,
//!     models::{Field, SessionStatus, WizardStep},
//!     notify::SimulatedSender,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let sender = SimulatedSender::new().with_delay(Duration::from_millis(10));
//! let mut wizard = Wizard::builder(sender).build();
//!
//! wizard.set_field(Field::FullName, "Jane Doe")?;
//! wizard.set_field(Field::BusinessName, "Doe Bakes")?;
//! wizard.set_field(Field::Email, "jane@x.com")?;
//! wizard.set_field(Field::Phone, "555-0100")?;
//! wizard.set_field(Field::Location, "NY")?;
//! wizard.set_field(Field::BusinessType, "Restaurant")?;
//! assert_eq!(wizard.advance()?, WizardStep::Preferences);
//!
//! wizard.set_field(Field::WebsiteStyle, "Modern")?;
//! wizard.set_field(Field::LayoutPreference, "Single Page")?;
//! wizard.toggle_feature("Home Page");
//! wizard.advance()?;
//!
//! wizard.set_field(Field::HasWebsite, "No")?;
//! wizard.set_field(Field::Budget, "Under $1,000")?;
//! wizard.set_field(Field::Timeline, "Flexible")?;
//! wizard.set_field(Field::Description, "A simple site")?;
//! wizard.advance()?;
//!
//! assert_eq!(wizard.submit().await?, SessionStatus::Success);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod models;
pub mod notify;
pub mod params;
pub mod validator;
pub mod wizard;

// Re-export commonly used types
pub use display::{OperationStatus, OptionLists, StatusBanner, StepForm, StepIndicator};
pub use error::{OnboardError, Result};
pub use models::{
    Field, FieldErrors, HasWebsite, LayoutPreference, ProjectRecord, SessionStatus, WizardStep,
};
pub use notify::{NotificationMessage, NotificationSender, OutboxSender, SimulatedSender};
pub use params::RecordUpdate;
pub use validator::{validate, validate_all};
pub use wizard::{Wizard, WizardBuilder};
