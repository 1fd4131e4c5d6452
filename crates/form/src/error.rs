use thiserror::Error;

use crate::field::FieldKey;

/// Input error for a single field. Only presence is checked, never shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{}", .0.required_message())]
    MissingRequiredField(FieldKey),
}

impl FieldError {
    pub fn field(&self) -> FieldKey {
        match self {
            FieldError::MissingRequiredField(key) => *key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_comes_from_field() {
        let err = FieldError::MissingRequiredField(FieldKey::Department);
        assert_eq!(err.to_string(), "Please select your department");
        assert_eq!(err.field(), FieldKey::Department);
    }
}
