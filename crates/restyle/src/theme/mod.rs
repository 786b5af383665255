//! Themes: named scales plus breakpoints.
//!
//! A [`Theme`] carries the lookup tables prop values resolve against and,
//! optionally, the ordered breakpoint sequence responsive values expand
//! over. Themes can be built programmatically or loaded from YAML/JSON
//! documents.
//!
//! ## Identity and the media-query cache
//!
//! Derived media-query tables are cached process-wide per theme *identity*
//! ([`ThemeId`]), not per content. Construction mints a fresh identity;
//! `Clone` preserves it. See [`Theme`] and
//! [`MediaQueries::for_theme`](crate::MediaQueries::for_theme) for the
//! exact staleness contract.

mod breakpoints;
#[allow(clippy::module_inception)]
mod theme;

pub use breakpoints::Breakpoints;
pub use theme::{Theme, ThemeId};
