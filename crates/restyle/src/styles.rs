//! The ordered result style object.

use serde::Serialize;
use serde_json::{Map, Value};

/// An ordered style object: base CSS properties first, then `@media`
/// blocks in ascending breakpoint order.
///
/// Serializes transparently to a JSON object, suitable as-is for a
/// CSS-in-JS renderer that accepts nested-object style definitions. Note
/// that equality on JSON maps is order-insensitive; tests that care about
/// key order assert on the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleObject {
    map: Map<String, Value>,
}

impl StyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_map(map: Map<String, Value>) -> Self {
        StyleObject { map }
    }

    /// Returns the value for a property or media-query key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Iterates keys in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Iterates `(key, value)` entries in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Borrows the underlying ordered map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }

    /// Merges another style object into this one, returning the result.
    ///
    /// Top-level entries from `other` overwrite entries with the same key,
    /// except that two mapping values (media blocks) under the same key
    /// merge per property, `other` winning on collision.
    pub fn merge(mut self, other: StyleObject) -> Self {
        for (key, value) in other.map {
            match value {
                Value::Object(incoming) => match self.map.get_mut(&key) {
                    Some(Value::Object(existing)) => {
                        existing.extend(incoming);
                    }
                    _ => {
                        self.map.insert(key, Value::Object(incoming));
                    }
                },
                value => {
                    self.map.insert(key, value);
                }
            }
        }
        self
    }
}

impl From<StyleObject> for Value {
    fn from(styles: StyleObject) -> Self {
        Value::Object(styles.map)
    }
}
