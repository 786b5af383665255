//! Media-query derivation and the process-wide breakpoint cache.
//!
//! A theme's breakpoint sequence derives into a [`MediaQueries`] table:
//! one `@media screen and (min-width: …)` condition per breakpoint, in
//! sequence order, plus the alias → index map. The base slot is implicit
//! and unconditional.
//!
//! Tables are cached per [`ThemeId`] for the life of the process. A theme
//! whose cache flag is disabled (see
//! [`Theme::disable_cache`](crate::Theme::disable_cache)) always recomputes
//! and neither reads nor writes the cache. Because identity survives
//! `Clone`, a cloned theme with different breakpoints still resolves to the
//! original's cached table until caching is bypassed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use crate::theme::{Theme, ThemeId};

/// Breakpoint widths used when a theme defines none.
pub const DEFAULT_BREAKPOINTS: [&str; 3] = ["40em", "52em", "64em"];

/// Formats a min-width media condition.
///
/// # Example
///
/// ```rust
/// use restyle::media_query;
///
/// assert_eq!(
///     media_query("40em"),
///     "@media screen and (min-width: 40em)"
/// );
/// ```
pub fn media_query(min_width: &str) -> String {
    format!("@media screen and (min-width: {})", min_width)
}

/// The derived breakpoint table for a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaQueries {
    queries: Vec<String>,
    aliases: HashMap<String, usize>,
}

static MEDIA_CACHE: Lazy<Mutex<HashMap<ThemeId, Arc<MediaQueries>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

impl MediaQueries {
    /// Returns the table for `theme`, deriving and caching on first use.
    ///
    /// Caching is keyed by [`Theme::id`]; entries are never evicted. With
    /// the theme's cache flag disabled the table is derived fresh and the
    /// cache is left untouched.
    pub fn for_theme(theme: &Theme) -> Arc<MediaQueries> {
        if theme.cache_disabled() {
            return Arc::new(Self::derive(theme));
        }
        let mut cache = MEDIA_CACHE.lock().unwrap();
        Arc::clone(
            cache
                .entry(theme.id())
                .or_insert_with(|| Arc::new(Self::derive(theme))),
        )
    }

    fn derive(theme: &Theme) -> Self {
        match theme.breakpoints() {
            Some(breakpoints) => MediaQueries {
                queries: breakpoints.iter().map(media_query).collect(),
                aliases: breakpoints
                    .aliases()
                    .map(|(name, index)| (name.to_string(), index))
                    .collect(),
            },
            None => MediaQueries {
                queries: DEFAULT_BREAKPOINTS.iter().map(|w| media_query(w)).collect(),
                aliases: HashMap::new(),
            },
        }
    }

    /// Returns the media-query string for breakpoint `index`.
    pub fn query(&self, index: usize) -> Option<&str> {
        self.queries.get(index).map(String::as_str)
    }

    /// Resolves a named alias to its breakpoint index.
    pub fn alias_index(&self, name: &str) -> Option<usize> {
        self.aliases.get(name).copied()
    }

    /// Number of breakpoints (the base slot is not counted).
    pub fn count(&self) -> usize {
        self.queries.len()
    }

    /// Iterates the media-query strings in breakpoint order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Breakpoints;

    #[test]
    fn media_query_format() {
        assert_eq!(media_query("52em"), "@media screen and (min-width: 52em)");
    }

    #[test]
    fn default_table_for_theme_without_breakpoints() {
        let table = MediaQueries::for_theme(&Theme::new());
        assert_eq!(table.count(), 3);
        assert_eq!(table.query(0), Some("@media screen and (min-width: 40em)"));
        assert_eq!(table.query(1), Some("@media screen and (min-width: 52em)"));
        assert_eq!(table.query(2), Some("@media screen and (min-width: 64em)"));
        assert_eq!(table.query(3), None);
    }

    #[test]
    fn themed_table_follows_sequence_order() {
        let theme = Theme::new().with_breakpoints(
            Breakpoints::new(["480px", "768px", "1024px"])
                .alias("lg", "1024px")
                .alias("sm", "480px"),
        );
        let table = MediaQueries::for_theme(&theme);
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![
                "@media screen and (min-width: 480px)",
                "@media screen and (min-width: 768px)",
                "@media screen and (min-width: 1024px)",
            ]
        );
        assert_eq!(table.alias_index("sm"), Some(0));
        assert_eq!(table.alias_index("lg"), Some(2));
        assert_eq!(table.alias_index("xl"), None);
    }

    #[test]
    fn cached_table_survives_clone_mutation() {
        let theme = Theme::new().with_breakpoints(Breakpoints::new(["40em"]));
        let first = MediaQueries::for_theme(&theme);

        // Same identity, different breakpoints: the cached table wins.
        let copy = theme
            .clone()
            .with_breakpoints(Breakpoints::new(["99em"]));
        let second = MediaQueries::for_theme(&copy);
        assert_eq!(first, second);
        assert_eq!(second.query(0), Some("@media screen and (min-width: 40em)"));
    }

    #[test]
    fn disabled_cache_recomputes_and_does_not_write() {
        let theme = Theme::new()
            .with_breakpoints(Breakpoints::new(["10em"]))
            .disable_cache(true);
        let bypassed = MediaQueries::for_theme(&theme);
        assert_eq!(
            bypassed.query(0),
            Some("@media screen and (min-width: 10em)")
        );

        // Re-enabling caching afterwards derives from the theme itself,
        // proving the disabled call wrote nothing.
        let copy = theme
            .clone()
            .with_breakpoints(Breakpoints::new(["20em"]))
            .disable_cache(false);
        let cached = MediaQueries::for_theme(&copy);
        assert_eq!(cached.query(0), Some("@media screen and (min-width: 20em)"));
    }

    #[test]
    fn distinct_themes_do_not_share_entries() {
        let a = Theme::new().with_breakpoints(Breakpoints::new(["30em"]));
        let b = Theme::new().with_breakpoints(Breakpoints::new(["70em"]));
        assert_eq!(
            MediaQueries::for_theme(&a).query(0),
            Some("@media screen and (min-width: 30em)")
        );
        assert_eq!(
            MediaQueries::for_theme(&b).query(0),
            Some("@media screen and (min-width: 70em)")
        );
    }
}
