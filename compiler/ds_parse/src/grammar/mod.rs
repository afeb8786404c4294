//! Recursive descent grammar.
//!
//! ```text
//! datashape := (dim '*')* measure
//! dim       := INT | 'var' | TYPEVAR | TYPEVAR '...' | '...'
//! measure   := '?' measure | record | paren | ctor | TYPEVAR | NAME
//! record    := '{' [field (',' field)* [',']] '}'
//! field     := (NAME | STRING) ':' datashape
//! paren     := '(' [datashape (',' datashape)* [',']] ')' ['->' datashape]
//! ```
//!
//! Dimensions and measures share one element rule; the type core checks
//! that every element but the last is a dimension.

mod index;
mod measure;

use ds_lexer::{Span, Token, TokenKind};
use ds_types::{DataShape, Mono, Param, TypeRegistry, TypeVar};

use crate::cursor::Cursor;
use crate::error::{ParseResult, SyntaxError, SyntaxErrorKind};
use crate::stack::ensure_sufficient_stack;

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    registry: &'a TypeRegistry,
}

/// Attach `span` to an error from the type core.
fn at<T>(result: ds_types::Result<T>, span: Span) -> ParseResult<T> {
    result.map_err(|err| SyntaxError::new(SyntaxErrorKind::Type(err), span))
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a str, tokens: &'a [Token], registry: &'a TypeRegistry) -> Self {
        Parser {
            cursor: Cursor::new(source, tokens),
            registry,
        }
    }

    /// Require that all input has been consumed.
    pub(crate) fn expect_end(&self, expected: &'static str) -> ParseResult<()> {
        if self.cursor.is_at_end() {
            Ok(())
        } else {
            Err(self.cursor.unexpected(expected))
        }
    }

    /// `(dim '*')* measure`. A lone measure is returned bare.
    pub(crate) fn parse_datashape(&mut self) -> ParseResult<Mono> {
        let start = self.cursor.current_span();
        let mut elements = vec![self.parse_element()?];
        while self.cursor.eat(&TokenKind::Star) {
            elements.push(self.parse_element()?);
        }
        if self.cursor.check(&TokenKind::Error) {
            return Err(self.cursor.unexpected("`*`"));
        }
        let span = start.merge(self.cursor.previous_span());
        let ds = at(
            DataShape::new(elements.into_iter().map(Param::Type).collect()),
            span,
        )?;
        if ds.ndim() == 0 {
            Ok(ds.measure().clone())
        } else {
            Ok(Mono::DataShape(ds))
        }
    }

    fn parse_element(&mut self) -> ParseResult<Mono> {
        ensure_sufficient_stack(|| self.parse_element_inner())
    }

    fn parse_element_inner(&mut self) -> ParseResult<Mono> {
        let token = self.cursor.current();
        match &token.kind {
            TokenKind::Int(n) => {
                self.cursor.advance();
                Ok(Mono::Fixed(*n))
            }
            TokenKind::Ellipsis => {
                self.cursor.advance();
                Ok(Mono::Ellipsis(None))
            }
            TokenKind::Question => {
                self.cursor.advance();
                let start = self.cursor.current_span();
                let inner = self.parse_element()?;
                let span = start.merge(self.cursor.previous_span());
                at(Mono::option(Param::Type(inner)), span)
            }
            TokenKind::LBrace => self.parse_record(),
            TokenKind::LParen => self.parse_paren(),
            TokenKind::Ident(name) => {
                self.cursor.advance();
                self.parse_named(name, token.span)
            }
            _ => Err(self.cursor.unexpected("a dimension or a type")),
        }
    }

    /// A name, possibly followed by `...` or a constructor argument list.
    fn parse_named(&mut self, name: &str, span: Span) -> ParseResult<Mono> {
        if self.cursor.eat(&TokenKind::Ellipsis) {
            let span = span.merge(self.cursor.previous_span());
            let tv = at(TypeVar::new(name), span)?;
            return Ok(Mono::Ellipsis(Some(tv)));
        }
        if self.cursor.check(&TokenKind::LBracket) {
            return self.parse_constructor(name, span);
        }
        self.resolve(name, span)
    }

    /// Registered types first; otherwise capitalized names are type variables.
    fn resolve(&self, name: &str, span: Span) -> ParseResult<Mono> {
        if let Some(ty) = self.registry.get(name) {
            return Ok(ty);
        }
        if name.starts_with(|c: char| c.is_ascii_uppercase()) {
            return at(Mono::typevar(name), span);
        }
        Err(SyntaxError::new(
            SyntaxErrorKind::UnknownName(name.to_owned()),
            span,
        ))
    }

    /// Comma separated `datashape`s up to `close`, allowing a trailing comma.
    fn parse_datashape_list(&mut self, close: &TokenKind) -> ParseResult<Vec<Mono>> {
        let mut items = Vec::new();
        while !self.cursor.check(close) {
            items.push(self.parse_datashape()?);
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
