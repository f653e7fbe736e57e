//! Error types for laxc-lex.
//!
//! Only conditions that end a lexing session, or prevent one from starting,
//! are errors. Suspicious-but-usable input is reported as a warning on the
//! [`laxc_util::Handler`] instead.

use thiserror::Error;

/// Error type for lexer construction and scanning.
#[derive(Debug, Error)]
pub enum LexError {
    /// Input that no producer recognizes. Lexing cannot continue.
    #[error("unexpected text {excerpt:?} at {file}:{line}")]
    UnexpectedText {
        /// File label given at construction.
        file: String,
        /// Line the lexer was on.
        line: u32,
        /// The first few characters of the unrecognized input.
        excerpt: String,
    },

    /// A select rule or text pattern that does not compile.
    #[error("invalid pattern for `{directive}`: {source}")]
    InvalidPattern {
        /// The directive (or option name) the pattern belongs to.
        directive: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A `select` directive that names no token type.
    #[error("malformed select directive `{0}`: expected `select <type> [args...]`")]
    MalformedDirective(String),

    /// Options could not be read from TOML.
    #[error("invalid TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    /// Options could not be read from JSON.
    #[error("invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LexError.
pub type Result<T> = std::result::Result<T, LexError>;
