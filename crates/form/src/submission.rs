//! Session-local submission log.
//!
//! Entries are created only by `SubmissionLog::append`, which the controller
//! calls after a clean validation pass. Nothing is ever removed or edited.

use serde::Serialize;

use crate::values::FieldValues;

/// One accepted submission. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionEntry {
    id: i64,
    name: String,
    department: String,
    feedback: String,
    rating: String,
}

impl SubmissionEntry {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Department code as submitted (`"IT"`, not the label).
    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    /// The four submitted values without the id.
    pub fn values(&self) -> FieldValues {
        FieldValues {
            name: self.name.clone(),
            department: self.department.clone(),
            feedback: self.feedback.clone(),
            rating: self.rating.clone(),
        }
    }
}

/// Append-only list of entries in submission order.
#[derive(Debug, Default, Clone)]
pub struct SubmissionLog {
    entries: Vec<SubmissionEntry>,
}

impl SubmissionLog {
    /// Append `values` under an id derived from `now_ms`.
    ///
    /// Ids are millisecond timestamps; two submissions within the same
    /// millisecond (or a clock stepping back) get `previous + 1` so ids stay
    /// unique and strictly increasing.
    pub fn append(&mut self, values: FieldValues, now_ms: i64) -> &SubmissionEntry {
        let id = match self.entries.last() {
            Some(last) if now_ms <= last.id => last.id + 1,
            _ => now_ms,
        };
        let FieldValues {
            name,
            department,
            feedback,
            rating,
        } = values;
        let index = self.entries.len();
        self.entries.push(SubmissionEntry {
            id,
            name,
            department,
            feedback,
            rating,
        });
        &self.entries[index]
    }

    pub fn entries(&self) -> &[SubmissionEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&SubmissionEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubmissionEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a SubmissionLog {
    type Item = &'a SubmissionEntry;
    type IntoIter = std::slice::Iter<'a, SubmissionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> FieldValues {
        FieldValues {
            name: name.into(),
            department: "Finance".into(),
            feedback: "Budget tool is slow".into(),
            rating: "2".into(),
        }
    }

    #[test]
    fn append_keeps_values_and_order() {
        let mut log = SubmissionLog::default();
        log.append(sample("a"), 1_000);
        log.append(sample("b"), 2_000);
        let names: Vec<_> = log.iter().map(SubmissionEntry::name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(log.entries()[1].values(), sample("b"));
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut log = SubmissionLog::default();
        let first = log.append(sample("a"), 5_000).id();
        let second = log.append(sample("b"), 5_000).id();
        let third = log.append(sample("c"), 4_000).id();
        assert_eq!(first, 5_000);
        assert_eq!(second, 5_001);
        assert_eq!(third, 5_002);
        assert_eq!(log.append(sample("d"), 9_000).id(), 9_000);
    }
}
