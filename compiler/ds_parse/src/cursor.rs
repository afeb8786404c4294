//! Token cursor.

use ds_lexer::{Span, Token, TokenKind};

use crate::error::{ParseResult, SyntaxError, SyntaxErrorKind};

/// Position in a token list. The list always ends in `Eof`, and the cursor
/// never moves past it.
pub(crate) struct Cursor<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        debug_assert!(matches!(
            tokens.last().map(|t| &t.kind),
            Some(TokenKind::Eof)
        ));
        Cursor {
            source,
            tokens,
            pos: 0,
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    pub(crate) fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .map_or(Span::point(0), |prev| self.tokens[prev].span)
    }

    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(&TokenKind::Eof)
    }

    /// Move to the next token, returning the one just passed.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> ParseResult<Span> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Error for the current token. Lexer errors are reported with the
    /// offending source text.
    pub(crate) fn unexpected(&self, expected: &'static str) -> SyntaxError {
        let token = self.current();
        let kind = match &token.kind {
            TokenKind::Error => SyntaxErrorKind::InvalidInput(
                self.source
                    .get(token.span.to_range())
                    .unwrap_or_default()
                    .to_owned(),
            ),
            other => SyntaxErrorKind::Unexpected {
                expected,
                found: other.describe(),
            },
        };
        SyntaxError::new(kind, token.span)
    }
}
