//! Ordered breakpoint sequences with named aliases.

use std::collections::HashMap;

use serde_json::Value;

/// An ordered sequence of breakpoint widths, optionally with named aliases.
///
/// Widths are CSS length strings (`"40em"`, `"768px"`). An alias names one
/// of the widths so that responsive mapping values can target it by name
/// instead of by position. Aliases resolve to the *index* of their width in
/// the ordered sequence at construction time; the order in which aliases
/// are added never matters.
///
/// # Example
///
/// ```rust
/// use restyle::Breakpoints;
///
/// let breakpoints = Breakpoints::new(["480px", "768px", "1024px"])
///     .alias("sm", "480px")
///     .alias("md", "768px")
///     .alias("lg", "1024px");
///
/// assert_eq!(breakpoints.alias_index("md"), Some(1));
/// assert_eq!(breakpoints.get(2), Some("1024px"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Breakpoints {
    values: Vec<String>,
    aliases: HashMap<String, usize>,
}

impl Breakpoints {
    /// Creates a breakpoint sequence from ordered width strings.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Breakpoints {
            values: values.into_iter().map(Into::into).collect(),
            aliases: HashMap::new(),
        }
    }

    /// Names one of the widths, returning `self` for chaining.
    ///
    /// The alias resolves to the index of `width` in the sequence. An alias
    /// for a width not present in the sequence is ignored.
    pub fn alias(mut self, name: impl Into<String>, width: &str) -> Self {
        if let Some(index) = self.values.iter().position(|v| v == width) {
            self.aliases.insert(name.into(), index);
        }
        self
    }

    /// Returns the index a named alias points at.
    pub fn alias_index(&self, name: &str) -> Option<usize> {
        self.aliases.get(name).copied()
    }

    /// Returns the width at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the sequence has no breakpoints.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the widths in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Iterates `(alias, index)` pairs in no particular order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, usize)> {
        self.aliases.iter().map(|(name, index)| (name.as_str(), *index))
    }
}

/// Document form: either a sequence of width strings, or a mapping
/// `{ values: [...], aliases: { name: width } }`.
impl TryFrom<&Value> for Breakpoints {
    type Error = String;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                let values = width_strings(items)?;
                Ok(Breakpoints::new(values))
            }
            Value::Object(map) => {
                let items = match map.get("values") {
                    Some(Value::Array(items)) => items,
                    _ => return Err("mapping form requires a 'values' sequence".to_string()),
                };
                let mut breakpoints = Breakpoints::new(width_strings(items)?);
                if let Some(aliases) = map.get("aliases") {
                    let aliases = aliases
                        .as_object()
                        .ok_or_else(|| "'aliases' must be a mapping".to_string())?;
                    for (name, width) in aliases {
                        let width = width
                            .as_str()
                            .ok_or_else(|| format!("alias '{}' must name a width string", name))?;
                        breakpoints = breakpoints.alias(name, width);
                    }
                }
                Ok(breakpoints)
            }
            _ => Err("expected a sequence of strings or a {values, aliases} mapping".to_string()),
        }
    }
}

fn width_strings(items: &[Value]) -> Result<Vec<String>, String> {
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| format!("breakpoint widths must be strings, got {}", item))
        })
        .collect()
}
