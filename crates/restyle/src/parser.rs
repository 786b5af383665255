//! Parser construction and composition.
//!
//! A [`Parser`] aggregates per-prop configurations and resolves a props
//! bag into one ordered [`StyleObject`]. Registration order is
//! significant: props are processed in the order their configs were
//! registered, and later writes to the same property win.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::config::{Config, PropConfig};
use crate::media::MediaQueries;
use crate::props::Props;
use crate::responsive::{expand, Bucket};
use crate::scale::resolve_scale;
use crate::styles::StyleObject;

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    config: Config,
}

/// A compiled set of prop configurations.
///
/// # Example
///
/// ```rust
/// use restyle::{Config, Parser, Props, Theme};
/// use serde_json::json;
///
/// let parser = Parser::builder()
///     .prop("color", Config::new("color").scale("colors"))
///     .shorthand("fontSize")
///     .build();
///
/// let theme = Theme::new()
///     .add("colors", json!({ "primary": "rebeccapurple" }))
///     .add("fontSize", json!([0, 4, 8, 16]));
///
/// let styles = parser.parse(
///     &Props::new()
///         .with_theme(theme)
///         .set("color", json!("primary"))
///         .set("fontSize", json!(2)),
/// );
///
/// assert_eq!(styles.get("color"), Some(&json!("rebeccapurple")));
/// assert_eq!(styles.get("fontSize"), Some(&json!(8)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    entries: Vec<Entry>,
}

impl Parser {
    /// Starts a builder.
    pub fn builder() -> ParserBuilder {
        ParserBuilder::default()
    }

    /// Iterates the registered prop keys in registration order.
    pub fn prop_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Resolves a props bag into an ordered style object.
    ///
    /// Registered keys absent from the bag (or set to null) contribute
    /// nothing; unregistered keys in the bag are ignored. Base properties
    /// come first in the result, then non-empty media blocks in ascending
    /// breakpoint order.
    pub fn parse(&self, props: &Props) -> StyleObject {
        let media = MediaQueries::for_theme(props.theme());
        let mut base: Map<String, Value> = Map::new();
        let mut buckets: BTreeMap<usize, Map<String, Value>> = BTreeMap::new();

        for entry in &self.entries {
            let raw = match props.get(&entry.key) {
                Some(raw) if !raw.is_null() => raw,
                _ => continue,
            };
            for (bucket, finished) in build_entries(&entry.config, raw, props, &media) {
                let target = match bucket {
                    Bucket::Base => &mut base,
                    Bucket::Breakpoint(index) => buckets.entry(index).or_default(),
                };
                target.insert(entry.config.property.clone(), finished);
            }
        }

        let mut styles = base;
        for (index, block) in buckets {
            if let Some(query) = media.query(index) {
                styles.insert(query.to_string(), Value::Object(block));
            }
        }
        StyleObject::from_map(styles)
    }
}

/// Builds one config's style entries for a raw prop value.
///
/// Each expanded `(bucket, value)` pair is resolved through the scale the
/// config names on the theme (falling back to the config's default scale),
/// then run through the transform if one is set.
fn build_entries(
    config: &Config,
    raw: &Value,
    props: &Props,
    media: &MediaQueries,
) -> Vec<(Bucket, Value)> {
    let scale = config
        .scale
        .as_deref()
        .and_then(|name| props.theme().scale(name))
        .or(config.default_scale.as_ref());

    expand(raw, media)
        .into_iter()
        .map(|(bucket, value)| {
            let resolved = resolve_scale(&value, scale);
            let finished = match config.transform {
                Some(transform) => transform(resolved, scale, props),
                None => resolved,
            };
            (bucket, finished)
        })
        .collect()
}

/// Builder for [`Parser`]; registration order is preserved.
#[derive(Debug, Default)]
pub struct ParserBuilder {
    entries: Vec<(String, PropConfig)>,
}

impl ParserBuilder {
    /// Registers a prop key with its configuration.
    ///
    /// Registering the same key again replaces the earlier configuration
    /// in place, keeping the original position.
    pub fn prop(mut self, key: impl Into<String>, config: impl Into<PropConfig>) -> Self {
        self.register(key.into(), config.into());
        self
    }

    /// Registers a prop key in shorthand form: the key names both the CSS
    /// property and the theme scale.
    pub fn shorthand(mut self, key: impl Into<String>) -> Self {
        self.register(key.into(), PropConfig::Shorthand);
        self
    }

    fn register(&mut self, key: String, config: PropConfig) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, existing)) => *existing = config,
            None => self.entries.push((key, config)),
        }
    }

    /// Resolves all registrations into an immutable parser.
    pub fn build(self) -> Parser {
        let entries = self
            .entries
            .into_iter()
            .map(|(key, config)| {
                let config = config.resolve(&key);
                Entry { key, config }
            })
            .collect();
        Parser { entries }
    }
}

/// Combines multiple parsers into one.
///
/// Entry lists are merged in order: a key registered by a later parser
/// replaces the earlier configuration in place, so later parsers win on
/// property collision while keys keep their first-registered position.
///
/// # Example
///
/// ```rust
/// use restyle::{compose, Config, Parser};
///
/// let color = Parser::builder()
///     .prop("color", Config::new("color").scale("colors"))
///     .build();
/// let typography = Parser::builder().shorthand("fontSize").build();
///
/// let parser = compose([color, typography]);
/// assert_eq!(parser.prop_names().collect::<Vec<_>>(), vec!["color", "fontSize"]);
/// ```
pub fn compose<I>(parsers: I) -> Parser
where
    I: IntoIterator<Item = Parser>,
{
    let mut entries: Vec<Entry> = Vec::new();
    for parser in parsers {
        for entry in parser.entries {
            match entries.iter_mut().find(|existing| existing.key == entry.key) {
                Some(existing) => existing.config = entry.config,
                None => entries.push(entry),
            }
        }
    }
    Parser { entries }
}
