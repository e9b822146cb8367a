//! Field presence tracking

use std::collections::BTreeSet;

use serde_json::{Map, Value};

/// Declared wire names that appeared as keys in an inbound payload.
///
/// Presence is about keys, not values: `"weight": 0`, `"admin_comment": ""`
/// and `"shipped_date_utc": null` are all present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPresenceSet {
    names: BTreeSet<&'static str>,
}

impl FieldPresenceSet {
    /// Records which of `declared` are keys of `object`
    pub fn from_object(object: &Map<String, Value>, declared: &[&'static str]) -> Self {
        let names = declared
            .iter()
            .copied()
            .filter(|name| object.contains_key(*name))
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }
}
