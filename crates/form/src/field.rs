//! Field keys and the closed value sets of the feedback form.
//!
//! - `FieldKey`:   the four inputs, in display order
//! - `Department`: fixed department enumeration (stored by code, shown by label)
//! - `RATINGS`:    the accepted rating values `"1"`..`"5"`

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// One of the four form inputs.
///
/// Ordering follows the on-screen order, which is also the iteration order of
/// `ValidationErrors`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldKey {
    Name,
    Department,
    Feedback,
    Rating,
}

impl FieldKey {
    /// Label rendered next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Name => "Your Name",
            FieldKey::Department => "Department",
            FieldKey::Feedback => "Your Feedback",
            FieldKey::Rating => "Rating",
        }
    }

    /// Hint shown while the field is empty.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FieldKey::Name => Some("Enter your name"),
            FieldKey::Department => Some("Select department"),
            FieldKey::Feedback => Some("Share your thoughts with us"),
            FieldKey::Rating => None,
        }
    }

    /// Message reported when the field is missing on submit.
    pub fn required_message(self) -> &'static str {
        match self {
            FieldKey::Name => "Please enter your name",
            FieldKey::Department => "Please select your department",
            FieldKey::Feedback => "Feedback is required",
            FieldKey::Rating => "Please select a rating",
        }
    }

    /// Free-text fields are trimmed before the presence check.
    pub fn is_free_text(self) -> bool {
        matches!(self, FieldKey::Name | FieldKey::Feedback)
    }

    pub fn all() -> impl Iterator<Item = FieldKey> {
        FieldKey::iter()
    }
}

/// Department options. The code (`"IT"`) is what gets stored, the label is
/// only used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Department {
    HR,
    IT,
    Marketing,
    Finance,
    Operations,
    Sales,
    Support,
}

impl Department {
    pub fn code(self) -> &'static str {
        match self {
            Department::HR => "HR",
            Department::IT => "IT",
            Department::Marketing => "Marketing",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
            Department::Sales => "Sales",
            Department::Support => "Support",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Department::HR => "Human Resources",
            Department::IT => "Information Technology",
            Department::Support => "Customer Support",
            other => other.code(),
        }
    }

    /// Exact, case-sensitive lookup by stored code.
    pub fn from_code(code: &str) -> Option<Department> {
        Department::iter().find(|d| d.code() == code)
    }

    /// Label for a stored code; unknown codes are rendered as-is.
    pub fn label_for(code: &str) -> &str {
        Department::from_code(code).map(Department::label).unwrap_or(code)
    }

    pub fn codes() -> Vec<&'static str> {
        Department::iter().map(Department::code).collect()
    }
}

/// Accepted rating values, lowest first.
pub const RATINGS: [&str; 5] = ["1", "2", "3", "4", "5"];

pub fn is_valid_rating(value: &str) -> bool {
    RATINGS.contains(&value)
}
