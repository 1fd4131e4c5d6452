use crate::error::FieldError;
use crate::field::{is_valid_rating, Department, FieldKey};
use crate::values::{FieldValues, ValidationErrors};

/// Presence check for every field; returns a fresh error map.
///
/// Free-text fields fail when empty after trimming. Department and rating are
/// picked from closed sets, so anything outside the set counts as "nothing
/// selected".
pub fn validate(values: &FieldValues) -> ValidationErrors {
    FieldKey::all()
        .filter(|key| !is_present(*key, values.get(*key)))
        .map(FieldError::MissingRequiredField)
        .collect()
}

fn is_present(key: FieldKey, value: &str) -> bool {
    match key {
        FieldKey::Department => Department::from_code(value).is_some(),
        FieldKey::Rating => is_valid_rating(value),
        _ if key.is_free_text() => !value.trim().is_empty(),
        _ => !value.is_empty(),
    }
}
