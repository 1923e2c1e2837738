//! Display formatting wrappers for the wizard.
//!
//! Domain types implement `Display` directly where there is one obvious
//! rendering (the review page for [`ProjectRecord`], the error list for
//! [`FieldErrors`]). Everything that depends on session context goes through
//! a small wrapper type instead.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Session state  │    │ Display wrappers│    │    Markdown     │
//! │ (record, step)  │───▶│  (StepForm, …)  │───▶│     output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: catalog lists (OptionLists)
//! - [`form`]: the current step as an editable form (StepForm)
//! - [`progress`]: step indicator (StepIndicator)
//! - [`status`]: submission banner and command feedback (StatusBanner,
//!   OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use onboard_core::{
//!     display::{StatusBanner, StepIndicator},
//!     models::{ProjectRecord, SessionStatus, WizardStep},
//! };
//!
//! let indicator = StepIndicator::new(WizardStep::Preferences);
//! assert!(indicator.to_string().starts_with("Step 2 of 4: Preferences"));
//!
//! let record = ProjectRecord {
//!     full_name: "Jane Doe".to_string(),
//!     ..Default::default()
//! };
//! let banner = StatusBanner::new(SessionStatus::Success, &record);
//! assert!(banner.to_string().contains("Thank you, Jane."));
//! ```
//!
//! [`ProjectRecord`]: crate::models::ProjectRecord
//! [`FieldErrors`]: crate::models::FieldErrors

pub mod collections;
pub mod form;
pub mod models;
pub mod progress;
pub mod status;

pub use collections::OptionLists;
pub use form::StepForm;
pub use progress::StepIndicator;
pub use status::{OperationStatus, StatusBanner};
