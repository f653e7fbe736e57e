//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Location;

/// Builder for [`Diagnostic`]s
///
/// # Examples
///
/// ```
/// use laxc_util::{DiagnosticBuilder, Handler, Location};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unexpected text")
///     .location(Location::new("doc.lax", 2))
///     .note("near `!!`")
///     .emit(&handler);
///
/// assert!(handler.has_errors());
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    location: Option<Location>,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            location: None,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source location
    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            location: self.location,
            code: self.code,
            notes: self.notes,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::warning("w").build();
        assert_eq!(diag.level, Level::Warning);
        assert!(diag.location.is_none());
        assert!(diag.code.is_none());
        assert!(diag.notes.is_empty());
    }

    #[test]
    fn test_builder_full() {
        let diag = DiagnosticBuilder::error("unexpected text")
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_TEXT)
            .location(Location::new("f.lax", 9))
            .note("first")
            .note("second")
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_TEXT));
        assert_eq!(diag.location, Some(Location::new("f.lax", 9)));
        assert_eq!(diag.notes, vec!["first", "second"]);
    }
}
