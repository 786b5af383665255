//! Utility functions for traversing dynamic theme data.

use serde_json::Value;

/// Looks up a dot-separated path inside a JSON value.
///
/// Each path segment descends one level: mappings are indexed by key,
/// sequences by the segment parsed as a decimal index. Returns `None` as
/// soon as a segment cannot be resolved.
///
/// # Example
///
/// ```rust
/// use restyle::get_path;
/// use serde_json::json;
///
/// let colors = json!({ "gray": { "100": "#f7fafc", "900": "#1a202c" } });
///
/// assert_eq!(get_path(&colors, "gray.900"), Some(&json!("#1a202c")));
/// assert_eq!(get_path(&colors, "gray.500"), None);
/// ```
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_segment_object_lookup() {
        let root = json!({ "primary": "rebeccapurple" });
        assert_eq!(get_path(&root, "primary"), Some(&json!("rebeccapurple")));
    }

    #[test]
    fn nested_object_lookup() {
        let root = json!({ "gray": { "100": "#f7fafc" } });
        assert_eq!(get_path(&root, "gray.100"), Some(&json!("#f7fafc")));
    }

    #[test]
    fn array_index_segment() {
        let root = json!({ "space": [0, 4, 8] });
        assert_eq!(get_path(&root, "space.2"), Some(&json!(8)));
    }

    #[test]
    fn missing_key_is_none() {
        let root = json!({ "a": 1 });
        assert_eq!(get_path(&root, "b"), None);
        assert_eq!(get_path(&root, "a.b"), None);
    }

    #[test]
    fn non_numeric_segment_on_array_is_none() {
        let root = json!([1, 2, 3]);
        assert_eq!(get_path(&root, "first"), None);
    }

    #[test]
    fn scalar_root_is_none() {
        assert_eq!(get_path(&json!(42), "anything"), None);
    }
}
