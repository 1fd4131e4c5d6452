//! `FormController` – owner of the form's field values, validation errors and
//! submission log.
//!
//! All operations are synchronous state transitions driven by the caller's
//! event loop. The controller never blocks and holds no shared state, so a
//! front end simply keeps one instance per mounted form.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::field::FieldKey;
use crate::notify::Notifier;
use crate::submission::{SubmissionEntry, SubmissionLog};
use crate::validate::validate;
use crate::values::{FieldValues, ValidationErrors};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Thank you for your feedback!";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Please fill in all required fields";

/// Behavioural switches of the controller (config section `form`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOptions {
    /// Drop a field's error as soon as the field is edited instead of waiting
    /// for the next submit.
    #[serde(default)]
    pub clear_errors_on_edit: bool,
}

/// Result of a single `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The entry that was appended to the log.
    Submitted(SubmissionEntry),
    /// Validation failed; the fields were left as they were.
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

#[derive(Debug, Default, Clone)]
pub struct FormController {
    options: FormOptions,
    values: FieldValues,
    errors: ValidationErrors,
    log: SubmissionLog,
}

impl FormController {
    pub fn new(options: FormOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submissions(&self) -> &SubmissionLog {
        &self.log
    }

    pub fn value(&self, key: FieldKey) -> &str {
        self.values.get(key)
    }

    /// Store `value` for `key`. No validation happens here.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values.set(key, value);
        if self.options.clear_errors_on_edit && self.errors.remove(key).is_some() {
            debug!(field = %key, "cleared field error on edit");
        }
    }

    /// Validate and, when everything is present, append the current values to
    /// the log and reset the form. Exactly one notification is emitted.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> SubmitOutcome {
        self.submit_at(notifier, chrono::Utc::now().timestamp_millis())
    }

    /// `submit` with an explicit clock reading (milliseconds since the epoch)
    /// used as the entry id candidate.
    pub fn submit_at(&mut self, notifier: &mut dyn Notifier, now_ms: i64) -> SubmitOutcome {
        self.errors = validate(&self.values);

        if !self.errors.is_empty() {
            debug!(
                missing = ?self.errors.keys().collect::<Vec<_>>(),
                "feedback submission rejected"
            );
            notifier.error(SUBMIT_FAILURE_MESSAGE);
            return SubmitOutcome::Rejected(self.errors.clone());
        }

        let values = std::mem::take(&mut self.values);
        let entry = self.log.append(values, now_ms).clone();
        info!(
            id = entry.id(),
            department = entry.department(),
            total = self.log.len(),
            "feedback submitted"
        );
        notifier.success(SUBMIT_SUCCESS_MESSAGE);
        SubmitOutcome::Submitted(entry)
    }
}
