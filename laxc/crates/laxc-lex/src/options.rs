//! Lexer options and the compiled rule table.
//!
//! Callers extend the grammar with *select directives*: ordered entries that
//! map a directive string of the form `select <type> [args...]` to a regular
//! expression. The first capture group of the expression becomes the token
//! payload.
//!
//! ```toml
//! text_pattern = '^([^.\n][^\n]+)'
//!
//! [[options]]
//! "select tag \\w+" = "^(#[a-z]+)"
//!
//! [[options]]
//! "select comment" = "^//([^\n]*)"
//! ```
//!
//! [`LexerOptions`] is the serde-facing form. [`Rules::compile`] parses every
//! directive and compiles every pattern once, so the lexer never looks at a
//! directive string again while scanning.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{LexError, Result};
use crate::token::TokenKind;

/// Pattern of the text fallback: a line that does not start with `.` and has
/// at least two characters.
pub const DEFAULT_TEXT_PATTERN: &str = r"^([^.\n][^\n]+)";

static DEFAULT_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&anchored(DEFAULT_TEXT_PATTERN)).expect("default text pattern compiles")
});

/// One options entry: directive string to pattern source, in insertion order.
pub type OptionEntry = IndexMap<String, String>;

/// Caller-facing lexer configuration.
///
/// Unknown keys are rejected, so a directive placed at the top level instead
/// of inside an `options` entry is an error rather than an empty grammar.
///
/// # Example
///
/// ```
/// use laxc_lex::LexerOptions;
///
/// let options = LexerOptions::from_json_str(r##"[{"select tag \\w+": "^(#[a-z]+)"}]"##).unwrap();
/// assert_eq!(options.entries.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexerOptions {
    /// Ordered select entries.
    #[serde(rename = "options", default)]
    pub entries: Vec<OptionEntry>,

    /// Replacement for [`DEFAULT_TEXT_PATTERN`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_pattern: Option<String>,
}

/// Accepted on-disk shapes: a bare list of entries, or a table.
#[derive(Deserialize)]
#[serde(untagged)]
enum OptionsRepr {
    Entries(Vec<OptionEntry>),
    Table(LexerOptions),
}

impl From<OptionsRepr> for LexerOptions {
    fn from(repr: OptionsRepr) -> Self {
        match repr {
            OptionsRepr::Entries(entries) => LexerOptions {
                entries,
                text_pattern: None,
            },
            OptionsRepr::Table(options) => options,
        }
    }
}

impl LexerOptions {
    /// Empty options: no select rules, default text pattern.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parses options from JSON, either `[{...}, ...]` or
    /// `{"options": [...], "text_pattern": "..."}`.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let repr: OptionsRepr = serde_json::from_str(source)?;
        Ok(repr.into())
    }

    /// Appends a single-directive entry.
    pub fn with_select(mut self, directive: impl Into<String>, pattern: impl Into<String>) -> Self {
        let mut entry = OptionEntry::new();
        entry.insert(directive.into(), pattern.into());
        self.entries.push(entry);
        self
    }

    /// Overrides the text fallback pattern.
    pub fn with_text_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.text_pattern = Some(pattern.into());
        self
    }
}

/// A compiled select directive.
#[derive(Clone, Debug)]
pub struct SelectRule {
    kind: TokenKind,
    args: Vec<String>,
    pattern: Regex,
}

impl SelectRule {
    /// Compiles one directive/pattern pair.
    ///
    /// Returns `Ok(None)` for directives that are not select directives.
    pub fn compile(directive: &str, pattern: &str) -> Result<Option<Self>> {
        let mut words = directive.split_whitespace();
        if words.next() != Some("select") {
            return Ok(None);
        }
        let kind = words
            .next()
            .ok_or_else(|| LexError::MalformedDirective(directive.to_string()))?;
        let args = words.map(str::to_string).collect();
        let pattern = compile_anchored(directive, pattern)?;

        Ok(Some(Self {
            kind: TokenKind::from_name(kind),
            args,
            pattern,
        }))
    }

    /// Kind of the tokens this rule produces.
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Directive words after the token type, passed through untouched.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The anchored pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// Pre-parsed rule table used by the lexer.
#[derive(Clone, Debug)]
pub struct Rules {
    select: Vec<SelectRule>,
    text: Regex,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            select: Vec::new(),
            text: DEFAULT_TEXT.clone(),
        }
    }
}

impl Rules {
    /// Compiles options into a rule table.
    ///
    /// Rules keep their option order: entries first, then keys within an
    /// entry. Directives that are not `select` directives are skipped.
    pub fn compile(options: &LexerOptions) -> Result<Self> {
        let mut select = Vec::new();
        for entry in &options.entries {
            for (directive, pattern) in entry {
                match SelectRule::compile(directive, pattern)? {
                    Some(rule) => select.push(rule),
                    None => tracing::debug!(directive = %directive, "skipping non-select directive"),
                }
            }
        }

        let text = match &options.text_pattern {
            Some(pattern) => compile_anchored("text_pattern", pattern)?,
            None => DEFAULT_TEXT.clone(),
        };

        Ok(Self { select, text })
    }

    /// Select rules in match order.
    pub fn select_rules(&self) -> &[SelectRule] {
        &self.select
    }

    /// Pattern of the text fallback.
    pub fn text_pattern(&self) -> &Regex {
        &self.text
    }
}

fn anchored(pattern: &str) -> String {
    format!(r"\A(?:{})", pattern)
}

fn compile_anchored(directive: &str, pattern: &str) -> Result<Regex> {
    Regex::new(&anchored(pattern)).map_err(|source| LexError::InvalidPattern {
        directive: directive.to_string(),
        source,
    })
}
