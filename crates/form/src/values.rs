//! Mutable editing state of the form (adapted from the popup `FormState`).
//!
//! - `FieldValues`:      the four raw string inputs
//! - `ValidationErrors`: per-field error map produced by `validate`
//!
//! Nothing in here knows about rendering; the controller owns both structs and
//! hands out shared references only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::field::FieldKey;

/// Current input of the form. Department is stored by code, rating as `"1"`..`"5"`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    pub name: String,
    pub department: String,
    pub feedback: String,
    pub rating: String,
}

impl FieldValues {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Department => &self.department,
            FieldKey::Feedback => &self.feedback,
            FieldKey::Rating => &self.rating,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Department => &mut self.department,
            FieldKey::Feedback => &mut self.feedback,
            FieldKey::Rating => &mut self.rating,
        };
        *slot = value.into();
    }

    /// Back to all-empty defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FieldKey::all().all(|key| self.get(key).is_empty())
    }
}

/// Field key → error. An absent key means the field passed the last check.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldKey, FieldError>,
}

impl ValidationErrors {
    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }

    pub fn remove(&mut self, key: FieldKey) -> Option<FieldError> {
        self.errors.remove(&key)
    }

    pub fn get(&self, key: FieldKey) -> Option<&FieldError> {
        self.errors.get(&key)
    }

    /// Human-readable message for `key`, if it failed.
    pub fn message(&self, key: FieldKey) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.errors.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &FieldError)> + '_ {
        self.errors.iter().map(|(k, v)| (*k, v))
    }

    /// Plain `key -> message` view, e.g. for JSON output.
    pub fn to_messages(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(key, err)| (key.to_string(), err.to_string()))
            .collect()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = ValidationErrors::default();
        for err in iter {
            errors.insert(err);
        }
        errors
    }
}
