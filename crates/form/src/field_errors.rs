//! Per-field validation outcome.

use indexmap::IndexMap;
use serde::Serialize;

/// Field name -> error list, in validation order.
///
/// A field that passed maps to `None`; a field that failed maps to a
/// non-empty list. Fields that were not validated are absent. Serializes to
/// a JSON object with `null` for passing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, Option<Vec<String>>>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of a field. An empty list is stored as `None`.
    pub fn insert(&mut self, field: impl Into<String>, messages: Option<Vec<String>>) {
        let messages = messages.filter(|m| !m.is_empty());
        self.0.insert(field.into(), messages);
    }

    pub fn remove(&mut self, field: &str) -> Option<Option<Vec<String>>> {
        self.0.shift_remove(field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Error messages of a field; `None` when it passed or was never
    /// validated.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).and_then(Option::as_deref)
    }

    /// Whether the field has an entry, passing or failing.
    #[must_use]
    pub fn is_validated(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// All messages in field order, then message order.
    #[must_use]
    pub fn to_array(&self) -> Vec<String> {
        self.0.values().flatten().flatten().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&[String]>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
