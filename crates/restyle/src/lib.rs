//! # Restyle - Responsive Style Prop Resolution
//!
//! `restyle` resolves declarative, responsive "style prop" values against a
//! design-system theme into a flat or media-query-nested style object,
//! ready for any CSS-in-JS renderer that accepts nested-object style
//! definitions.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: named scales (lookup tables) plus an optional
//!   [`Breakpoints`] sequence; buildable in code or loaded from YAML/JSON
//! - [`Config`]: how one prop maps to a CSS property, which scale it
//!   resolves through, and an optional [`Transform`]
//! - [`Parser`]: a compiled set of prop configs; [`Parser::parse`] turns a
//!   [`Props`] bag into a [`StyleObject`]
//! - [`compose`]: combines several parsers into one
//! - Responsive values: arrays (`[base, bp0, bp1, …]`) or mappings keyed by
//!   `"_"` and breakpoint aliases
//!
//! ## Quick Start
//!
//! ```rust
//! use restyle::{Config, Parser, Props, Theme};
//! use serde_json::json;
//!
//! let theme = Theme::new()
//!     .add("colors", json!({
//!         "primary": "rebeccapurple",
//!         "secondary": "papayawhip",
//!     }))
//!     .add("fontSize", json!([0, 4, 8, 16]));
//!
//! let parser = Parser::builder()
//!     .prop("color", Config::new("color").scale("colors"))
//!     .shorthand("fontSize")
//!     .build();
//!
//! let styles = parser.parse(
//!     &Props::new()
//!         .with_theme(theme)
//!         .set("fontSize", json!([1, 2, 3]))
//!         .set("color", json!(["primary", null, "secondary"])),
//! );
//!
//! assert_eq!(styles.get("color"), Some(&json!("rebeccapurple")));
//! assert_eq!(styles.get("fontSize"), Some(&json!(4)));
//! assert_eq!(
//!     styles.get("@media screen and (min-width: 40em)"),
//!     Some(&json!({ "fontSize": 8 })),
//! );
//! assert_eq!(
//!     styles.get("@media screen and (min-width: 52em)"),
//!     Some(&json!({ "fontSize": 16, "color": "papayawhip" })),
//! );
//! ```
//!
//! Without theme breakpoints, responsive values expand over the defaults
//! `40em`, `52em`, `64em`. Null entries skip their slot; the engine never
//! carries a value forward between slots.
//!
//! ## Named Breakpoints
//!
//! Breakpoint aliases let responsive mappings target slots by name. The
//! alias resolves to the position of its width in the ordered sequence, so
//! output order always follows the sequence, never key insertion order:
//!
//! ```rust
//! use restyle::{Breakpoints, Parser, Props, Theme};
//! use serde_json::json;
//!
//! let theme = Theme::new()
//!     .add("fontSize", json!([12, 14, 16, 20]))
//!     .with_breakpoints(
//!         Breakpoints::new(["480px", "768px", "1024px"])
//!             .alias("sm", "480px")
//!             .alias("md", "768px")
//!             .alias("lg", "1024px"),
//!     );
//!
//! let parser = Parser::builder().shorthand("fontSize").build();
//!
//! let styles = parser.parse(
//!     &Props::new()
//!         .with_theme(theme)
//!         .set("fontSize", json!({ "lg": 3, "_": 0, "sm": 1 })),
//! );
//!
//! assert_eq!(styles.get("fontSize"), Some(&json!(12)));
//! assert_eq!(
//!     styles.keys().collect::<Vec<_>>(),
//!     vec![
//!         "fontSize",
//!         "@media screen and (min-width: 480px)",
//!         "@media screen and (min-width: 1024px)",
//!     ],
//! );
//! ```
//!
//! ## YAML Themes
//!
//! ```rust
//! use restyle::Theme;
//!
//! let theme = Theme::from_yaml(r#"
//! breakpoints: ["40em", "52em", "64em"]
//! colors:
//!   primary: rebeccapurple
//! space: [0, 4, 8, 16, 32]
//! "#).unwrap();
//! ```
//!
//! ## Caching
//!
//! Derived media-query tables are cached for the life of the process,
//! keyed by theme *identity* ([`ThemeId`]) rather than content. `Clone`
//! preserves identity, so a cloned-and-modified theme keeps resolving
//! against the original's cached table; construct a fresh theme, or bypass
//! the cache with [`Theme::disable_cache`], to see different breakpoints.
//! This staleness is deliberate: it trades correctness-under-mutation for
//! call-to-call stability.
//!
//! ## Resolution Never Fails
//!
//! Unknown scale keys, out-of-range indices, and unmatched breakpoint
//! aliases degrade to literal passthrough or silent omission; a
//! best-effort style beats a broken render. The only fallible surface is
//! theme document loading ([`ThemeError`]).

// Internal modules
mod config;
mod error;
mod media;
mod parser;
pub mod prelude;
mod props;
mod responsive;
mod scale;
mod styles;
mod theme;
mod util;

// Error type
pub use error::ThemeError;

// Theme module exports
pub use theme::{Breakpoints, Theme, ThemeId};

// Media query exports
pub use media::{media_query, MediaQueries, DEFAULT_BREAKPOINTS};

// Resolution exports
pub use responsive::{expand, Bucket};
pub use scale::resolve_scale;

// Parser exports
pub use config::{Config, PropConfig, Transform};
pub use parser::{compose, Parser, ParserBuilder};
pub use props::Props;
pub use styles::StyleObject;

// Utility exports
pub use util::get_path;
