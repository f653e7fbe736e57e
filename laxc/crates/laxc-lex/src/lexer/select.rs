//! Select rules.
//!
//! Select rules run before indentation and the text fallback, so a rule can
//! claim any line the built-in producers would otherwise handle.

use crate::token::Token;

use super::core::scan;
use super::Lexer;

impl<'a> Lexer<'a> {
    /// Tries every select rule in order; the first match wins.
    pub(super) fn select(&mut self) -> Option<Token> {
        let Self {
            cursor,
            rules,
            line,
            ..
        } = self;
        rules
            .select_rules()
            .iter()
            .find_map(|rule| scan(cursor, *line, rule.pattern(), rule.kind()))
    }
}
