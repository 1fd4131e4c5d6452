//! Display metadata for the four inputs (which widget, which options).
//!
//! Values and validation live in `feedback_form::FormController`; this module
//! only decides how a field is edited and shown:
//! - `Text`     single-line editor (name)
//! - `TextArea` multi-row editor, wrapped at render time (feedback)
//! - `Select`   cycles through department codes with Left/Right
//! - `Radio`    one-of-N row, Left/Right or a digit key

use feedback_form::{Department, FieldKey, RATINGS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFieldKind {
    Text,
    TextArea { rows: u16 },
    Select { options: Vec<String> },
    Radio { options: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub key: FieldKey,
    pub kind: FormFieldKind,
}

impl FormField {
    pub fn new(key: FieldKey, kind: FormFieldKind) -> Self {
        Self { key, kind }
    }

    pub fn label(&self) -> &'static str {
        self.key.label()
    }

    pub fn placeholder(&self) -> &'static str {
        self.key.placeholder().unwrap_or("")
    }

    /// Fields edited through the text input.
    pub fn is_textual(&self) -> bool {
        matches!(
            self.kind,
            FormFieldKind::Text | FormFieldKind::TextArea { .. }
        )
    }

    /// Options of a choice field, `None` for text fields.
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            FormFieldKind::Select { options } | FormFieldKind::Radio { options } => Some(options),
            _ => None,
        }
    }

    /// Rows the value occupies on screen.
    pub fn value_rows(&self) -> u16 {
        match self.kind {
            FormFieldKind::TextArea { rows } => rows.max(1),
            _ => 1,
        }
    }
}

/// The feedback form's fields in display order.
pub fn feedback_fields() -> Vec<FormField> {
    vec![
        FormField::new(FieldKey::Name, FormFieldKind::Text),
        FormField::new(
            FieldKey::Department,
            FormFieldKind::Select {
                options: Department::codes().into_iter().map(String::from).collect(),
            },
        ),
        FormField::new(FieldKey::Feedback, FormFieldKind::TextArea { rows: 3 }),
        FormField::new(
            FieldKey::Rating,
            FormFieldKind::Radio {
                options: RATINGS.iter().map(|r| r.to_string()).collect(),
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_follow_key_order() {
        let keys: Vec<FieldKey> = feedback_fields().iter().map(|f| f.key).collect();
        assert_eq!(keys, FieldKey::all().collect::<Vec<_>>());
    }

    #[test]
    fn choice_fields_expose_codes() {
        let fields = feedback_fields();
        assert_eq!(
            fields[1].options().map(|o| o.len()),
            Some(7),
            "seven departments"
        );
        assert_eq!(fields[1].options().unwrap()[0], "HR");
        assert_eq!(fields[3].options().unwrap().last().map(String::as_str), Some("5"));
        assert!(fields[0].options().is_none());
        assert!(fields[2].is_textual());
        assert_eq!(fields[2].value_rows(), 3);
    }
}
