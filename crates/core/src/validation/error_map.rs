//! Field name -> message map produced by the validator.

use indexmap::IndexMap;
use serde::Serialize;

/// Per-field validation messages, keyed by field name.
///
/// Keys keep the order in which fields were checked (schema order). An empty
/// map means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(IndexMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Field names with errors, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_insert_replaces_message() {
        let mut errors = ErrorMap::new();
        errors.insert("fullName", "first");
        errors.insert("fullName", "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("fullName"), Some("second"));
    }

    #[test]
    fn serializes_as_plain_object_in_insert_order() {
        let mut errors = ErrorMap::new();
        errors.insert("b", "2");
        errors.insert("a", "1");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"b":"2","a":"1"}"#);
    }
}
