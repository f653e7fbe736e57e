//! Lexer module.
//!
//! The lexer is split by producer:
//! - `core` - Lexer struct, queues, and dispatch
//! - `indent` - indentation to indent/outdent/newline translation
//! - `select` - caller-supplied select rules
//! - `fallback` - end of stream, the text fallback, and failure

mod core;
mod fallback;
mod indent;
mod select;

pub use self::core::{tokenize, Lexer};
