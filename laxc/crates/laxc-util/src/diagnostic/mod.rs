//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! The lexer never prints anything itself. Warnings about suspicious input
//! and the description of a fatal scan failure are pushed into a
//! [`Handler`], which the embedding parser owns and inspects afterwards.
//!
//! # Examples
//!
//! ```
//! use laxc_util::diagnostic::{Diagnostic, Handler};
//! use laxc_util::Location;
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::warning("odd line", Location::new("a.lax", 1)));
//!
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Location;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use laxc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// The lexing session cannot continue
    Error,
    /// Lexing continues, but the input is probably not what the author meant
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Where the problem was found, if known
    pub location: Option<Location>,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic at a location
    pub fn new(level: Level, message: impl Into<String>, location: Location) -> Self {
        Self {
            level,
            message: message.into(),
            location: Some(location),
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, location: Location) -> Self {
        Self::new(Level::Error, message, location)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, location: Location) -> Self {
        Self::new(Level::Warning, message, location)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Renders as `warning[W1001]: message` followed by ` --> file:line` and
/// one ` = note:` line per note.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if let Some(location) = &self.location {
            write!(f, "\n --> {}", location)?;
        }
        for note in &self.notes {
            write!(f, "\n = note: {}", note)?;
        }
        Ok(())
    }
}

/// Handler for collecting diagnostics
///
/// Interior mutability lets a lexer hold a shared reference while the caller
/// keeps another one for inspection.
///
/// # Examples
///
/// ```
/// use laxc_util::diagnostic::{Diagnostic, Handler};
/// use laxc_util::Location;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("boom", Location::new("x", 1)));
///
/// if handler.has_errors() {
///     eprintln!("lexing failed with {} errors", handler.error_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error
    pub fn build_error(&self, location: Location, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).location(location)
    }

    /// Create a diagnostic builder for a warning
    pub fn build_warning(&self, location: Location, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).location(location)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

}
