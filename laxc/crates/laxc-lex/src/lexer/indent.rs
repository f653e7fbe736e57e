//! Indentation handling.
//!
//! Every line transition produces exactly one structural token:
//!
//! | next line                          | token                      |
//! |------------------------------------|----------------------------|
//! | blank                              | `newline`                  |
//! | narrower than the innermost block  | `outdent` (one per level)  |
//! | wider than, or no open block       | `indent(width)`            |
//! | same width / width zero            | `newline`                  |
//!
//! When several blocks close at once, the first outdents wait in the stash
//! and the last one is returned, so each call still yields a single token.

use crate::token::{Token, TokenKind, TokenValue};

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Handles a line transition if the input starts with a newline.
    pub(super) fn indent(&mut self) -> Option<Token> {
        if !self.cursor.starts_with('\n') {
            return None;
        }

        // Tabs win; spaces are only measured when no tab follows the newline.
        let tabs = self.cursor.count_run(1, b'\t');
        let width = if tabs > 0 {
            tabs
        } else {
            self.cursor.count_run(1, b' ')
        };

        self.line += 1;
        self.cursor.consume(width + 1);

        if self.cursor.starts_with('\n') {
            return Some(self.tok(TokenKind::Newline, None));
        }

        let tok = match self.indent_stack.last().copied() {
            Some(innermost) if width < innermost => self.close_blocks(width),
            innermost if width > 0 && innermost != Some(width) => {
                self.indent_stack.push(width);
                self.tok(TokenKind::Indent, Some(TokenValue::Width(width)))
            },
            _ => self.tok(TokenKind::Newline, None),
        };
        Some(tok)
    }

    /// Pops every open block wider than `width` and returns the last
    /// outdent, stashing the others.
    fn close_blocks(&mut self, width: usize) -> Token {
        let mut closed = 0;
        while self.indent_stack.last().is_some_and(|&open| open > width) {
            self.indent_stack.pop();
            closed += 1;
        }

        for _ in 1..closed {
            let tok = self.tok(TokenKind::Outdent, None);
            self.stash.push_back(tok);
        }
        self.tok(TokenKind::Outdent, None)
    }
}
