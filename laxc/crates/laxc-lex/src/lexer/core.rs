//! Core lexer implementation.
//!
//! This module contains the Lexer struct, its token queues, and the producer
//! dispatch.

use std::collections::VecDeque;

use laxc_util::{Handler, Location};
use regex::Regex;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::options::{LexerOptions, Rules};
use crate::token::{Token, TokenKind, TokenValue};

/// Lexer for lax source text.
///
/// Tokens are produced on demand. [`advance`](Lexer::advance) returns the
/// next token in stream order, [`lookahead`](Lexer::lookahead) peeks without
/// consuming, and [`defer`](Lexer::defer) lets the parser push a token back
/// in front of everything else.
///
/// # Example
///
/// ```
/// use laxc_lex::{Lexer, TokenKind};
/// use laxc_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("head\n  body", "page.lax", &handler);
///
/// assert_eq!(lexer.advance().unwrap().kind, TokenKind::Text);
/// assert_eq!(lexer.lookahead(1).unwrap().kind, TokenKind::Indent);
/// assert_eq!(lexer.advance().unwrap().width(), Some(2));
/// ```
pub struct Lexer<'a> {
    /// Unconsumed input.
    pub(super) cursor: Cursor,

    /// File label for diagnostics.
    pub(super) filename: String,

    /// Compiled select rules and text pattern.
    pub(super) rules: Rules,

    /// Current line (1-based).
    pub(super) line: u32,

    /// Tokens computed ahead of the reader.
    pub(super) stash: VecDeque<Token>,

    /// Tokens pushed back by the caller.
    pub(super) deferred: VecDeque<Token>,

    /// Open indent widths, innermost last.
    pub(super) indent_stack: Vec<usize>,

    /// Receives warnings and the fatal error.
    pub(super) handler: &'a Handler,

    /// Set once the iterator has yielded `eos` or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with no select rules and the default text pattern.
    pub fn new(source: &str, filename: impl Into<String>, handler: &'a Handler) -> Self {
        Self::with_rules(source, filename, Rules::default(), handler)
    }

    /// Creates a lexer, compiling `options` first.
    pub fn with_options(
        source: &str,
        filename: impl Into<String>,
        options: &LexerOptions,
        handler: &'a Handler,
    ) -> Result<Self> {
        let rules = Rules::compile(options)?;
        Ok(Self::with_rules(source, filename, rules, handler))
    }

    /// Creates a lexer from an already compiled rule table.
    pub fn with_rules(
        source: &str,
        filename: impl Into<String>,
        rules: Rules,
        handler: &'a Handler,
    ) -> Self {
        let filename = filename.into();
        tracing::debug!(
            file = %filename,
            select_rules = rules.select_rules().len(),
            "creating lexer"
        );
        Self {
            cursor: Cursor::new(source),
            filename,
            rules,
            line: 1,
            stash: VecDeque::new(),
            deferred: VecDeque::new(),
            indent_stack: Vec::new(),
            handler,
            finished: false,
        }
    }

    /// Returns the next token in stream order.
    ///
    /// Stashed tokens come first; only when the stash is empty is a fresh
    /// token computed.
    pub fn advance(&mut self) -> Result<Token> {
        match self.stashed() {
            Some(tok) => Ok(tok),
            None => self.next_token(),
        }
    }

    /// Returns the `n`-th upcoming token (1-based) without consuming it.
    ///
    /// Calling this again with no `advance` in between returns the same
    /// token. `n == 0` is treated as `1`.
    pub fn lookahead(&mut self, n: usize) -> Result<&Token> {
        let n = n.max(1);
        while self.stash.len() < n {
            let tok = self.next_token()?;
            self.stash.push_back(tok);
        }
        Ok(&self.stash[n - 1])
    }

    /// Queues `token` to be returned by the next call to
    /// [`next_token`](Lexer::next_token), ahead of any scanning.
    pub fn defer(&mut self, token: Token) {
        self.deferred.push_back(token);
    }

    /// Pops the oldest stashed token.
    pub fn stashed(&mut self) -> Option<Token> {
        self.stash.pop_front()
    }

    /// Pops the oldest deferred token.
    pub fn deferred(&mut self) -> Option<Token> {
        self.deferred.pop_front()
    }

    /// Computes one fresh token, bypassing the stash.
    ///
    /// Producers are tried in priority order: deferred tokens, end of
    /// stream, select rules, indentation, the text fallback, and finally
    /// failure. A failure that only skipped a trailing space starts the
    /// round again on the shorter input.
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            let produced = self
                .deferred()
                .or_else(|| self.eos())
                .or_else(|| self.select())
                .or_else(|| self.indent())
                .or_else(|| self.warn());

            if let Some(tok) = produced {
                tracing::trace!(token = %tok, "token");
                return Ok(tok);
            }

            self.fail()?;
        }
    }

    /// Builds a token stamped with the current line.
    pub(super) fn tok(&self, kind: TokenKind, val: Option<TokenValue>) -> Token {
        Token::new(kind, self.line, val)
    }

    /// The current location, for diagnostics.
    pub(super) fn location(&self) -> Location {
        Location::new(self.filename.clone(), self.line)
    }

    /// Current line (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File label given at construction.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The unconsumed, normalized input.
    pub fn remaining(&self) -> &str {
        self.cursor.remaining()
    }

    /// Open indent widths, outermost first.
    pub fn indent_levels(&self) -> &[usize] {
        &self.indent_stack
    }

    /// The rule table this lexer scans with.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

/// Yields tokens up to, but not including, the first `eos`. A fatal error is
/// yielded once and ends the iteration.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.advance() {
            Ok(tok) if tok.kind == TokenKind::Eos => {
                self.finished = true;
                None
            },
            Ok(tok) => Some(Ok(tok)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("filename", &self.filename)
            .field("line", &self.line)
            .field("remaining", &self.cursor.remaining())
            .field("stash", &self.stash)
            .field("deferred", &self.deferred)
            .field("indent_stack", &self.indent_stack)
            .finish()
    }
}

/// Lexes a whole document, returning every token before the first `eos`.
pub fn tokenize(
    source: &str,
    filename: &str,
    options: &LexerOptions,
    handler: &Handler,
) -> Result<Vec<Token>> {
    Lexer::with_options(source, filename, options, handler)?.collect()
}

/// Matches `pattern` at the head of the input and, on success, consumes the
/// match and returns a `kind` token carrying the first capture. An empty
/// match counts as no match, so every token from here consumes input.
///
/// Takes the cursor rather than the lexer so callers can pass a pattern
/// borrowed from the lexer's own rule table.
pub(super) fn scan(cursor: &mut Cursor, line: u32, pattern: &Regex, kind: &TokenKind) -> Option<Token> {
    let matched = cursor.match_prefix(pattern).filter(|m| m.len > 0)?;
    cursor.consume(matched.len);
    Some(Token::new(kind.clone(), line, matched.capture.map(TokenValue::Text)))
}
