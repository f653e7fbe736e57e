//! Source locations for diagnostics.
//!
//! The tokenizer only tracks lines, so a location is a file label plus a
//! 1-based line number.

use std::fmt;

/// A file label and a 1-based line number.
///
/// # Examples
///
/// ```
/// use laxc_util::Location;
///
/// let loc = Location::new("index.lax", 4);
/// assert_eq!(loc.to_string(), "index.lax:4");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// Opaque file label, used only for display.
    pub file: String,
    /// Line number (1-based).
    pub line: u32,
}

impl Location {
    /// Creates a location.
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
