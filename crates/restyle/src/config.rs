//! Per-prop style configuration.

use serde_json::Value;

use crate::props::Props;

/// A transform applied to a resolved value before it is written out.
///
/// Receives the resolved value, the scale it was resolved against (if
/// any), and the full props bag (which carries the theme). Transforms are
/// plain function values: configs are data, not behavior.
pub type Transform = fn(Value, Option<&Value>, &Props) -> Value;

/// Configuration for a single style prop.
///
/// Only the CSS property name is required. `scale` names the theme scale
/// to resolve values through; `default_scale` is consulted when the theme
/// lacks that scale; `transform` post-processes resolved values.
///
/// # Example
///
/// ```rust
/// use restyle::Config;
/// use serde_json::json;
///
/// let color = Config::new("color").scale("colors");
/// let width = Config::new("width").default_scale(json!(["25%", "50%", "100%"]));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) property: String,
    pub(crate) scale: Option<String>,
    pub(crate) default_scale: Option<Value>,
    pub(crate) transform: Option<Transform>,
}

impl Config {
    /// Creates a config writing to the given CSS property.
    pub fn new(property: impl Into<String>) -> Self {
        Config {
            property: property.into(),
            scale: None,
            default_scale: None,
            transform: None,
        }
    }

    /// Names the theme scale to resolve through, returning `self` for
    /// chaining.
    pub fn scale(mut self, name: impl Into<String>) -> Self {
        self.scale = Some(name.into());
        self
    }

    /// Sets the fallback scale used when the theme lacks the named one.
    pub fn default_scale(mut self, scale: impl Into<Value>) -> Self {
        self.default_scale = Some(scale.into());
        self
    }

    /// Sets the transform applied to resolved values.
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// The CSS property this config writes to.
    pub fn property(&self) -> &str {
        &self.property
    }
}

/// A registered prop configuration: either the shorthand form (use the
/// prop key as both property and scale name) or an explicit [`Config`].
///
/// The shorthand is resolved into an explicit config once, at parser
/// construction.
#[derive(Debug, Clone)]
pub enum PropConfig {
    /// Property and scale both take the registered prop key.
    Shorthand,
    /// A full configuration record.
    Explicit(Config),
}

impl PropConfig {
    pub(crate) fn resolve(self, key: &str) -> Config {
        match self {
            PropConfig::Shorthand => Config::new(key).scale(key),
            PropConfig::Explicit(config) => config,
        }
    }
}

impl From<Config> for PropConfig {
    fn from(config: Config) -> Self {
        PropConfig::Explicit(config)
    }
}
