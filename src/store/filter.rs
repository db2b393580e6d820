//! # Exact-match query filters
//!
//! The store contract filters documents by field equality only, the
//! way a Mongo query document built from plain values does.

use std::collections::BTreeMap;

use serde_json::Value;

/// A set of field constraints combined with AND logic
///
/// An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: BTreeMap<String, Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality constraint on a field
    pub fn eq(mut self, field: impl Into<String>, value: Value) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    /// True when no constraints are set
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Constraints in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(field, value)| (field.as_str(), value))
    }

    /// Check if a document satisfies every constraint
    pub fn matches(&self, doc: &Value) -> bool {
        self.fields
            .iter()
            .all(|(field, value)| doc.get(field.as_str()) == Some(value))
    }
}
