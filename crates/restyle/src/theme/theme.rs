//! Theme struct for building scale collections.
//!
//! A theme maps scale names (`"colors"`, `"space"`) to lookup tables, and
//! optionally carries a [`Breakpoints`] sequence for responsive resolution.
//! Themes support both programmatic construction and YAML/JSON document
//! loading.
//!
//! # Identity
//!
//! Every constructed theme receives an opaque [`ThemeId`]. The derived
//! media-query table is cached process-wide under this token, standing in
//! for the object-reference identity a dynamic-language host would use.
//! `Clone` copies the token: a cloned-and-modified theme keeps the
//! original's identity, so the cached table for the original keeps winning
//! until caching is bypassed with [`disable_cache`](Theme::disable_cache).
//! That staleness is documented behavior, trading correctness-under-
//! mutation for call-to-call stability.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Map, Value};

use crate::error::ThemeError;

use super::breakpoints::Breakpoints;

static NEXT_THEME_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity token for a theme.
///
/// Fresh per constructed theme, copied by `Clone`. Used as the breakpoint
/// cache key; never derived from theme contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeId(u64);

impl ThemeId {
    fn next() -> Self {
        ThemeId(NEXT_THEME_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A collection of named scales plus optional breakpoints.
///
/// # Example: Programmatic Construction
///
/// ```rust
/// use restyle::{Breakpoints, Theme};
/// use serde_json::json;
///
/// let theme = Theme::new()
///     .add("colors", json!({ "primary": "rebeccapurple" }))
///     .add("space", json!([0, 4, 8, 16]))
///     .with_breakpoints(Breakpoints::new(["480px", "768px"]));
/// ```
///
/// # Example: From YAML
///
/// ```rust
/// use restyle::Theme;
///
/// let theme = Theme::from_yaml(r#"
/// breakpoints: ["40em", "52em"]
/// colors:
///   primary: rebeccapurple
/// "#).unwrap();
///
/// assert!(theme.scale("colors.primary").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    id: ThemeId,
    scales: Map<String, Value>,
    breakpoints: Option<Breakpoints>,
    cache_disabled: bool,
}

impl Theme {
    /// Creates an empty theme with a fresh identity.
    pub fn new() -> Self {
        Theme {
            id: ThemeId::next(),
            scales: Map::new(),
            breakpoints: None,
            cache_disabled: false,
        }
    }

    /// Adds a named scale, returning `self` for chaining.
    ///
    /// A scale is either an ordered sequence (indexed by small integers) or
    /// a mapping (indexed by key, nestable).
    pub fn add(mut self, name: impl Into<String>, scale: impl Into<Value>) -> Self {
        self.scales.insert(name.into(), scale.into());
        self
    }

    /// Sets the breakpoint sequence, returning `self` for chaining.
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    /// Controls whether this theme bypasses the media-query cache.
    ///
    /// A theme with caching disabled always recomputes its media-query
    /// table and neither reads nor writes the process-wide cache.
    pub fn disable_cache(mut self, disabled: bool) -> Self {
        self.cache_disabled = disabled;
        self
    }

    /// Loads a theme from a YAML document.
    ///
    /// The document is a mapping; the reserved key `breakpoints` accepts an
    /// ordered sequence of width strings or the mapping form
    /// `{ values: [...], aliases: { name: width } }`. Every other top-level
    /// key becomes a scale.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the document cannot be parsed or the
    /// breakpoints entry has an unsupported shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        let doc: Value = serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Self::from_document(doc, None)
    }

    /// Loads a theme from a JSON document. Same shape rules as
    /// [`from_yaml`](Theme::from_yaml).
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let doc: Value = serde_json::from_str(json).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Self::from_document(doc, None)
    }

    /// Loads a theme from a file.
    ///
    /// `.json` files are parsed as JSON; anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let doc: Value = if is_json {
            serde_json::from_str(&content).map_err(|e| ThemeError::Parse {
                path: Some(path.to_path_buf()),
                message: e.to_string(),
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|e| ThemeError::Parse {
                path: Some(path.to_path_buf()),
                message: e.to_string(),
            })?
        };

        Self::from_document(doc, Some(path))
    }

    fn from_document(doc: Value, path: Option<&Path>) -> Result<Self, ThemeError> {
        let mut map = match doc {
            Value::Object(map) => map,
            other => {
                return Err(ThemeError::Parse {
                    path: path.map(Path::to_path_buf),
                    message: format!("expected a mapping at the top level, got {}", other),
                })
            }
        };

        let breakpoints = match map.remove("breakpoints") {
            Some(value) => {
                let parsed = Breakpoints::try_from(&value).map_err(|message| {
                    ThemeError::InvalidBreakpoints {
                        message,
                        path: path.map(Path::to_path_buf),
                    }
                })?;
                Some(parsed)
            }
            None => None,
        };

        Ok(Theme {
            id: ThemeId::next(),
            scales: map,
            breakpoints,
            cache_disabled: false,
        })
    }

    /// Returns this theme's identity token.
    pub fn id(&self) -> ThemeId {
        self.id
    }

    /// Looks up a scale by dot-separated path (`"colors"`, `"colors.dark"`).
    pub fn scale(&self, path: &str) -> Option<&Value> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let root = self.scales.get(head)?;
        match rest {
            Some(rest) => crate::util::get_path(root, rest),
            None => Some(root),
        }
    }

    /// Returns the breakpoint sequence, if set.
    pub fn breakpoints(&self) -> Option<&Breakpoints> {
        self.breakpoints.as_ref()
    }

    /// True if this theme bypasses the media-query cache.
    pub fn cache_disabled(&self) -> bool {
        self.cache_disabled
    }

    /// Returns true if no scales are defined.
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Number of defined scales.
    pub fn len(&self) -> usize {
        self.scales.len()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
