//! Index expressions, written the way they appear between `[` and `]`.
//!
//! ```text
//! index := item (',' item)* [',']
//! item  := INT | '-' INT | NAME | STRING | slice | '[' [item (',' item)*] ']'
//! slice := [int] ':' [int] [':' [int]]
//! ```
//!
//! More than one item (or a trailing comma) makes a per-axis tuple.

use ds_lexer::TokenKind;
use ds_types::{Index, Slice};

use super::Parser;
use crate::error::{ParseResult, SyntaxError, SyntaxErrorKind};

impl Parser<'_> {
    pub(crate) fn parse_index(&mut self) -> ParseResult<Index> {
        let first = self.parse_index_item()?;
        if !self.cursor.check(&TokenKind::Comma) {
            return Ok(first);
        }
        let mut items = vec![first];
        while self.cursor.eat(&TokenKind::Comma) {
            if self.cursor.is_at_end() {
                break;
            }
            items.push(self.parse_index_item()?);
        }
        Ok(Index::Tuple(items))
    }

    fn parse_index_item(&mut self) -> ParseResult<Index> {
        match self.cursor.current_kind() {
            TokenKind::LBracket => {
                self.cursor.advance();
                let mut items = Vec::new();
                while !self.cursor.check(&TokenKind::RBracket) {
                    items.push(self.parse_index_item()?);
                    if !self.cursor.eat(&TokenKind::Comma) {
                        break;
                    }
                }
                self.cursor.expect(&TokenKind::RBracket, "`,` or `]`")?;
                Ok(Index::List(items))
            }
            TokenKind::Ident(name) | TokenKind::String(name) => {
                self.cursor.advance();
                Ok(Index::Field(name.clone()))
            }
            TokenKind::Colon => self.parse_slice_rest(None),
            TokenKind::Int(_) | TokenKind::Minus => {
                let n = self.parse_signed_int()?;
                if self.cursor.check(&TokenKind::Colon) {
                    self.parse_slice_rest(Some(n))
                } else {
                    Ok(Index::Int(n))
                }
            }
            _ => Err(self.cursor.unexpected("an index")),
        }
    }

    /// Everything after the start of `start:stop:step`.
    fn parse_slice_rest(&mut self, start: Option<i64>) -> ParseResult<Index> {
        self.cursor.expect(&TokenKind::Colon, "`:`")?;
        let stop = self.parse_optional_int()?;
        let step = if self.cursor.eat(&TokenKind::Colon) {
            self.parse_optional_int()?
        } else {
            None
        };
        Ok(Index::Slice(Slice::new(start, stop, step)))
    }

    fn parse_optional_int(&mut self) -> ParseResult<Option<i64>> {
        match self.cursor.current_kind() {
            TokenKind::Int(_) | TokenKind::Minus => self.parse_signed_int().map(Some),
            _ => Ok(None),
        }
    }

    fn parse_signed_int(&mut self) -> ParseResult<i64> {
        let negative = self.cursor.eat(&TokenKind::Minus);
        match self.cursor.current_kind() {
            TokenKind::Int(n) => {
                let span = self.cursor.current_span();
                self.cursor.advance();
                let value = if negative { -i128::from(*n) } else { i128::from(*n) };
                i64::try_from(value).map_err(|_| {
                    SyntaxError::new(
                        SyntaxErrorKind::Unexpected {
                            expected: "a 64-bit index",
                            found: format!("integer `{value}`"),
                        },
                        span,
                    )
                })
            }
            _ => Err(self.cursor.unexpected("an integer")),
        }
    }
}
