//! Input cursor for the lexer.
//!
//! The cursor owns the normalized source text and a byte offset marking how
//! much of it has been consumed. Everything the lexer matches is matched
//! against [`Cursor::remaining`], so "the head of the input" always means the
//! byte at the current offset.

use regex::Regex;

/// Collapses `\r\n` and lone `\r` into `\n`.
///
/// # Example
///
/// ```
/// use laxc_lex::cursor::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
/// ```
pub fn normalize_newlines(source: &str) -> String {
    if !source.contains('\r') {
        return source.to_string();
    }

    let mut normalized = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            normalized.push('\n');
        } else {
            normalized.push(c);
        }
    }
    normalized
}

/// A successful anchored match at the head of the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixMatch {
    /// Length of the whole match in bytes.
    pub len: usize,
    /// Text of the first capture group, when the pattern has one and it
    /// participated in the match.
    pub capture: Option<String>,
}

/// A cursor over normalized source text.
///
/// # Example
///
/// ```
/// use laxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab\r\ncd");
/// assert_eq!(cursor.remaining(), "ab\ncd");
/// cursor.consume(3);
/// assert_eq!(cursor.remaining(), "cd");
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    /// The normalized source text.
    source: String,

    /// Byte offset of the first unconsumed character.
    position: usize,
}

impl Cursor {
    /// Creates a cursor, normalizing line endings first.
    pub fn new(source: &str) -> Self {
        Self {
            source: normalize_newlines(source),
            position: 0,
        }
    }

    /// The unconsumed part of the input.
    #[inline]
    pub fn remaining(&self) -> &str {
        &self.source[self.position..]
    }

    /// Returns true once every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns true if the input starts with `c`.
    #[inline]
    pub fn starts_with(&self, c: char) -> bool {
        self.remaining().starts_with(c)
    }

    /// Drops `len` bytes from the head of the input.
    ///
    /// Asking for more than remains consumes the rest. A length that would
    /// split a UTF-8 sequence is rounded up to the next character boundary.
    pub fn consume(&mut self, len: usize) {
        let mut end = self.position.saturating_add(len).min(self.source.len());
        while !self.source.is_char_boundary(end) {
            end += 1;
        }
        self.position = end;
    }

    /// Counts how many `byte`s follow the given offset without interruption.
    ///
    /// # Example
    ///
    /// ```
    /// use laxc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("\n\t\tx");
    /// assert_eq!(cursor.count_run(1, b'\t'), 2);
    /// assert_eq!(cursor.count_run(1, b' '), 0);
    /// ```
    pub fn count_run(&self, offset: usize, byte: u8) -> usize {
        self.remaining()
            .as_bytes()
            .iter()
            .skip(offset)
            .take_while(|&&b| b == byte)
            .count()
    }

    /// Matches `pattern` at the head of the input.
    ///
    /// Only a match starting at offset zero counts; a match further along the
    /// input is treated as no match at all.
    pub fn match_prefix(&self, pattern: &Regex) -> Option<PrefixMatch> {
        let captures = pattern.captures(self.remaining())?;
        let whole = captures.get(0)?;
        if whole.start() != 0 {
            return None;
        }
        Some(PrefixMatch {
            len: whole.end(),
            capture: captures.get(1).map(|m| m.as_str().to_string()),
        })
    }

    /// The first `chars` characters of the remaining input.
    pub fn excerpt(&self, chars: usize) -> String {
        self.remaining().chars().take(chars).collect()
    }
}
