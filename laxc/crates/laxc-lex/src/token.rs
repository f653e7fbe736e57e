//! Token definitions.
//!
//! A token is a kind, the line it was produced on, and an optional payload.
//! Built-in kinds describe block structure (`indent`, `outdent`, `newline`,
//! `eos`) and the fallback `text`; select rules may introduce any other kind
//! by name.
//!
//! Tokens serialize to the shape the parser consumes:
//!
//! ```
//! use laxc_lex::{Token, TokenKind, TokenValue};
//!
//! let tok = Token::new(TokenKind::Indent, 2, Some(TokenValue::Width(4)));
//! let json = serde_json::to_string(&tok).unwrap();
//! assert_eq!(json, r#"{"type":"indent","line":2,"val":4}"#);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type discriminator of a token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TokenKind {
    /// A deeper block starts; the payload is the new indent width.
    Indent,
    /// One block level closes.
    Outdent,
    /// A line break that keeps the current block level.
    Newline,
    /// End of stream; repeated forever once the input is drained.
    Eos,
    /// A line picked up by the text fallback.
    Text,
    /// A kind introduced by a select rule.
    Custom(String),
}

impl TokenKind {
    /// Maps a type name to a kind. Built-in names map to their variants.
    ///
    /// ```
    /// use laxc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_name("outdent"), TokenKind::Outdent);
    /// assert_eq!(TokenKind::from_name("tag"), TokenKind::Custom("tag".into()));
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "indent" => TokenKind::Indent,
            "outdent" => TokenKind::Outdent,
            "newline" => TokenKind::Newline,
            "eos" => TokenKind::Eos,
            "text" => TokenKind::Text,
            other => TokenKind::Custom(other.to_string()),
        }
    }

    /// The type name as the parser sees it.
    pub fn as_str(&self) -> &str {
        match self {
            TokenKind::Indent => "indent",
            TokenKind::Outdent => "outdent",
            TokenKind::Newline => "newline",
            TokenKind::Eos => "eos",
            TokenKind::Text => "text",
            TokenKind::Custom(name) => name,
        }
    }

    /// Returns true for the kinds produced by the indentation machinery.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TokenKind::Indent | TokenKind::Outdent | TokenKind::Newline | TokenKind::Eos
        )
    }
}

impl From<String> for TokenKind {
    fn from(name: String) -> Self {
        TokenKind::from_name(&name)
    }
}

impl From<TokenKind> for String {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Custom(name) => name,
            builtin => builtin.as_str().to_string(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload carried by a token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Indent width in tabs or spaces.
    Width(usize),
    /// Text captured by a pattern's first group.
    Text(String),
}

impl TokenValue {
    /// Returns the text payload, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            TokenValue::Width(_) => None,
        }
    }

    /// Returns the width payload, if this is one.
    pub fn as_width(&self) -> Option<usize> {
        match self {
            TokenValue::Width(width) => Some(*width),
            TokenValue::Text(_) => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Width(width) => write!(f, "{}", width),
            TokenValue::Text(text) => write!(f, "{:?}", text),
        }
    }
}

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Token type.
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Line the lexer was on when the token was produced (1-based).
    pub line: u32,
    /// Optional payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val: Option<TokenValue>,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, line: u32, val: Option<TokenValue>) -> Self {
        Self { kind, line, val }
    }

    /// The text payload, if any.
    pub fn text(&self) -> Option<&str> {
        self.val.as_ref().and_then(TokenValue::as_text)
    }

    /// The width payload, if any.
    pub fn width(&self) -> Option<usize> {
        self.val.as_ref().and_then(TokenValue::as_width)
    }
}

/// `kind@line` or `kind(val)@line`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.val {
            Some(val) => write!(f, "{}({})@{}", self.kind, val, self.line),
            None => write!(f, "{}@{}", self.kind, self.line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_names_round_trip() {
        for name in ["indent", "outdent", "newline", "eos", "text", "tag"] {
            assert_eq!(TokenKind::from_name(name).as_str(), name);
        }
    }

    #[test]
    fn test_structural_kinds() {
        assert!(TokenKind::Indent.is_structural());
        assert!(TokenKind::Eos.is_structural());
        assert!(!TokenKind::Text.is_structural());
        assert!(!TokenKind::from_name("tag").is_structural());
    }

    #[test]
    fn test_serialize_without_val() {
        let tok = Token::new(TokenKind::Eos, 7, None);
        assert_eq!(serde_json::to_string(&tok).unwrap(), r#"{"type":"eos","line":7}"#);
    }

    #[test]
    fn test_serialize_custom_text() {
        let tok = Token::new(
            TokenKind::from_name("tag"),
            1,
            Some(TokenValue::Text("#foo".into())),
        );
        assert_eq!(
            serde_json::to_string(&tok).unwrap(),
            r##"{"type":"tag","line":1,"val":"#foo"}"##
        );
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let tok: Token = serde_json::from_str(r#"{"type":"indent","line":3,"val":2}"#).unwrap();
        assert_eq!(tok, Token::new(TokenKind::Indent, 3, Some(TokenValue::Width(2))));

        let tok: Token = serde_json::from_str(r#"{"type":"text","line":1,"val":"hi"}"#).unwrap();
        assert_eq!(tok.text(), Some("hi"));
        assert_eq!(tok.width(), None);
    }

    #[test]
    fn test_display() {
        let tok = Token::new(TokenKind::Indent, 2, Some(TokenValue::Width(4)));
        assert_eq!(tok.to_string(), "indent(4)@2");
        let tok = Token::new(TokenKind::Text, 1, Some(TokenValue::Text("a b".into())));
        assert_eq!(tok.to_string(), "text(\"a b\")@1");
        assert_eq!(Token::new(TokenKind::Outdent, 5, None).to_string(), "outdent@5");
    }
}
