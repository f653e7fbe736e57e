//! End of stream and last-resort producers.

use laxc_util::DiagnosticCode;

use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};

use super::core::scan;
use super::Lexer;

/// Characters of unrecognized input quoted in the fatal error.
const EXCERPT_LEN: usize = 5;

impl<'a> Lexer<'a> {
    /// Once the input is drained, closes one open block per call and then
    /// yields `eos` forever.
    pub(super) fn eos(&mut self) -> Option<Token> {
        if !self.cursor.is_at_end() {
            return None;
        }
        let kind = match self.indent_stack.pop() {
            Some(_) => TokenKind::Outdent,
            None => TokenKind::Eos,
        };
        Some(self.tok(kind, None))
    }

    /// Accepts a line the grammar has no rule for as `text`, warning about
    /// it.
    pub(super) fn warn(&mut self) -> Option<Token> {
        let tok = scan(
            &mut self.cursor,
            self.line,
            self.rules.text_pattern(),
            &TokenKind::Text,
        )?;

        tracing::warn!(file = %self.filename, line = self.line, "missing space before text");
        self.handler
            .build_warning(self.location(), "missing space before text")
            .code(DiagnosticCode::W_LEXER_MISSING_SPACE)
            .emit(self.handler);

        Some(tok)
    }

    /// Skips a single trailing space, or gives up.
    ///
    /// `Ok(())` means a space before a newline (or the end of input) was
    /// consumed and dispatch should run again.
    pub(super) fn fail(&mut self) -> Result<()> {
        let rest = self.cursor.remaining().as_bytes();
        if rest.first() == Some(&b' ') && matches!(rest.get(1), None | Some(b'\n')) {
            tracing::debug!(file = %self.filename, line = self.line, "skipping trailing space");
            self.cursor.consume(1);
            return Ok(());
        }

        let excerpt = self.cursor.excerpt(EXCERPT_LEN);
        self.handler
            .build_error(self.location(), "unexpected text")
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_TEXT)
            .note(format!("input continues with {:?}", excerpt))
            .emit(self.handler);

        Err(LexError::UnexpectedText {
            file: self.filename.clone(),
            line: self.line,
            excerpt,
        })
    }
}
