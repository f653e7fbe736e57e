//! laxc-util - Shared infrastructure for the lax tokenizer
//!
//! This crate holds the pieces that are not specific to lexing itself:
//!
//! - [`diagnostic`] - warnings and errors collected through a [`Handler`]
//! - [`location`] - file/line pairs attached to diagnostics
//!
//! # Example
//!
//! ```
//! use laxc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Location};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("missing space before text")
//!     .code(DiagnosticCode::W_LEXER_MISSING_SPACE)
//!     .location(Location::new("page.lax", 3))
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! assert!(!handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod location;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use location::Location;
