//! Error types for theme document loading.
//!
//! Resolution itself never fails: unknown scale keys, out-of-range indices,
//! and unmatched breakpoint aliases all degrade to literal passthrough or
//! silent omission. [`ThemeError`] covers the one fallible surface, turning
//! a YAML/JSON document (or file) into a [`Theme`](crate::Theme).

use std::fmt;
use std::path::PathBuf;

/// Error type for theme document parsing and loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Malformed YAML/JSON, or a document that is not a mapping.
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the underlying parser.
        message: String,
    },

    /// File read failure.
    Load {
        /// Error message from the loader.
        message: String,
    },

    /// The `breakpoints` entry has an unsupported shape.
    InvalidBreakpoints {
        /// Description of what was wrong.
        message: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::Parse { path, message } => {
                if let Some(p) = path {
                    write!(f, "Failed to parse theme {}: {}", p.display(), message)
                } else {
                    write!(f, "Failed to parse theme: {}", message)
                }
            }
            ThemeError::Load { message } => {
                write!(f, "Failed to load theme: {}", message)
            }
            ThemeError::InvalidBreakpoints { message, path } => {
                let location = path
                    .as_ref()
                    .map(|p| format!(" in {}", p.display()))
                    .unwrap_or_default();
                write!(f, "Invalid breakpoints{}: {}", location, message)
            }
        }
    }
}

impl std::error::Error for ThemeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_includes_path() {
        let err = ThemeError::Parse {
            path: Some(PathBuf::from("themes/site.yaml")),
            message: "bad indent".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("themes/site.yaml"));
        assert!(msg.contains("bad indent"));
    }

    #[test]
    fn load_error_display() {
        let err = ThemeError::Load {
            message: "no such file".to_string(),
        };
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn invalid_breakpoints_display() {
        let err = ThemeError::InvalidBreakpoints {
            message: "expected a sequence of strings".to_string(),
            path: None,
        };
        assert!(err.to_string().contains("breakpoints"));
    }
}
