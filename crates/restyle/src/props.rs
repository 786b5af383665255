//! The props bag handed to a parser.

use serde_json::{Map, Value};

use crate::theme::Theme;

/// A themed bag of prop values.
///
/// Carries the [`Theme`] alongside arbitrary prop keys. Keys the parser
/// has no configuration for are ignored at parse time.
///
/// # Example
///
/// ```rust
/// use restyle::{Props, Theme};
/// use serde_json::json;
///
/// let props = Props::new()
///     .with_theme(Theme::new().add("colors", json!({ "primary": "#07c" })))
///     .set("color", json!("primary"))
///     .set("fontSize", json!([1, 2]));
///
/// assert_eq!(props.get("color"), Some(&json!("primary")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Props {
    theme: Theme,
    values: Map<String, Value>,
}

impl Props {
    /// Creates an empty props bag with a default (empty) theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the theme, returning `self` for chaining.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets a prop value, returning `self` for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Returns the prop value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The theme carried by this bag.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Iterates the prop keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of prop values (the theme is not counted).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no prop values are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_props_is_empty() {
        let props = Props::new();
        assert!(props.is_empty());
        assert_eq!(props.len(), 0);
        assert!(props.theme().is_empty());
    }

    #[test]
    fn set_and_get() {
        let props = Props::new().set("color", json!("tomato"));
        assert_eq!(props.get("color"), Some(&json!("tomato")));
        assert_eq!(props.get("margin"), None);
    }

    #[test]
    fn set_overwrites() {
        let props = Props::new().set("m", json!(1)).set("m", json!(2));
        assert_eq!(props.get("m"), Some(&json!(2)));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn keys_preserve_insertion_order() {
        let props = Props::new()
            .set("z", json!(1))
            .set("a", json!(2))
            .set("m", json!(3));
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    }

    #[test]
    fn with_theme_replaces_theme() {
        let theme = Theme::new().add("colors", json!({}));
        let props = Props::new().with_theme(theme);
        assert!(!props.theme().is_empty());
    }
}
