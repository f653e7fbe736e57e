//! laxc-lex - Lexical Analyzer for the lax markup language
//!
//! This crate turns lax source text into a stream of tokens for the parser.
//! lax is indentation sensitive: leading whitespace after a line break opens
//! and closes blocks, which the lexer reports as `indent` and `outdent`
//! tokens. Everything else is either claimed by a caller-supplied *select
//! rule* or falls back to a `text` token.
//!
//! # Example Usage
//!
//! ```
//! use laxc_lex::{Lexer, LexerOptions, TokenKind};
//! use laxc_util::Handler;
//!
//! let options = LexerOptions::new().with_select("select tag \\w+", "^(#[a-z]+)");
//! let handler = Handler::new();
//! let mut lexer = Lexer::with_options("#nav\n  links", "page.lax", &options, &handler).unwrap();
//!
//! let tag = lexer.advance().unwrap();
//! assert_eq!(tag.kind.as_str(), "tag");
//! assert_eq!(tag.text(), Some("#nav"));
//!
//! assert_eq!(lexer.lookahead(2).unwrap().kind, TokenKind::Text);
//! assert_eq!(lexer.advance().unwrap().kind, TokenKind::Indent);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, TokenKind and TokenValue
//! - [`lexer`] - The Lexer and its producers
//! - [`cursor`] - Normalized input and anchored matching
//! - [`options`] - Select directives and the compiled rule table
//! - [`error`] - LexError
//!
//! # Producers
//!
//! Each fresh token comes from the first producer that accepts the input:
//!
//! 1. tokens pushed back with [`Lexer::defer`]
//! 2. end of stream (one `outdent` per open block, then `eos` forever)
//! 3. select rules, in option order
//! 4. indentation after a newline (`indent`, `outdent`, or `newline`)
//! 5. the text fallback, which also emits a warning
//! 6. failure: a trailing space is skipped, anything else is fatal

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod options;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use lexer::{tokenize, Lexer};
pub use options::{LexerOptions, OptionEntry, Rules, SelectRule, DEFAULT_TEXT_PATTERN};
pub use token::{Token, TokenKind, TokenValue};
