//! Prelude for convenient imports.
//!
//! Re-exports the types most programs need in one line:
//!
//! ```rust
//! use restyle::prelude::*;
//! use serde_json::json;
//!
//! let parser = Parser::builder()
//!     .prop("color", Config::new("color").scale("colors"))
//!     .build();
//!
//! let styles = parser.parse(
//!     &Props::new()
//!         .with_theme(Theme::new().add("colors", json!({ "primary": "#07c" })))
//!         .set("color", json!("primary")),
//! );
//!
//! assert_eq!(styles.get("color"), Some(&json!("#07c")));
//! ```

pub use crate::config::{Config, PropConfig, Transform};
pub use crate::error::ThemeError;
pub use crate::parser::{compose, Parser, ParserBuilder};
pub use crate::props::Props;
pub use crate::styles::StyleObject;
pub use crate::theme::{Breakpoints, Theme};
