//! Core of the feedback form.
//!
//! The crate is UI-agnostic: a front end feeds field edits into a
//! [`FormController`], calls [`FormController::submit`] with a [`Notifier`]
//! and renders the read-only snapshots the controller hands out.
//!
//! ```
//! use feedback_form::{FieldKey, FormController, Notification, SubmitOutcome};
//!
//! let mut form = FormController::default();
//! form.set_field(FieldKey::Name, "Alice");
//! form.set_field(FieldKey::Department, "IT");
//! form.set_field(FieldKey::Feedback, "Great tools");
//! form.set_field(FieldKey::Rating, "5");
//!
//! let mut toasts: Vec<Notification> = Vec::new();
//! assert!(matches!(form.submit(&mut toasts), SubmitOutcome::Submitted(_)));
//! assert_eq!(form.submissions().len(), 1);
//! ```

pub mod controller;
pub mod error;
pub mod field;
pub mod notify;
pub mod submission;
pub mod validate;
pub mod values;

pub use controller::{FormController, FormOptions, SubmitOutcome};
pub use error::FieldError;
pub use field::{Department, FieldKey, RATINGS};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use submission::{SubmissionEntry, SubmissionLog};
pub use validate::validate;
pub use values::{FieldValues, ValidationErrors};
