//! Records, tuples, functions and parameterized constructors.

use std::sync::Arc;

use ds_lexer::{Span, TokenKind};
use ds_types::{
    DataShape, Field, Function, Mono, Param, Record, StringOptions, StringType, Tuple, Units,
};

use super::{at, Parser};
use crate::error::{ParseResult, SyntaxError, SyntaxErrorKind};

impl Parser<'_> {
    /// `'{' [field (',' field)* [',']] '}'`
    pub(super) fn parse_record(&mut self) -> ParseResult<Mono> {
        let start = self.cursor.expect(&TokenKind::LBrace, "`{`")?;
        let mut fields = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            let name = self.parse_field_name()?;
            self.cursor.expect(&TokenKind::Colon, "`:`")?;
            let ty = self.parse_datashape()?;
            fields.push(Field::new(name, ty));
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        let end = self.cursor.expect(&TokenKind::RBrace, "`,` or `}`")?;
        at(Record::from_fields(fields), start.merge(end)).map(Mono::Record)
    }

    fn parse_field_name(&mut self) -> ParseResult<Arc<str>> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) | TokenKind::String(name) => {
                self.cursor.advance();
                Ok(name.clone())
            }
            _ => Err(self.cursor.unexpected("a field name")),
        }
    }

    /// A tuple `(a, b)` or a function `(a, b) -> r`.
    pub(super) fn parse_paren(&mut self) -> ParseResult<Mono> {
        let start = self.cursor.expect(&TokenKind::LParen, "`(`")?;
        let items = self.parse_datashape_list(&TokenKind::RParen)?;
        let close = self.cursor.expect(&TokenKind::RParen, "`,` or `)`")?;
        let params = items.into_iter().map(Param::Type);
        if self.cursor.eat(&TokenKind::Arrow) {
            let ret = self.parse_datashape()?;
            let span = start.merge(self.cursor.previous_span());
            at(Function::new(params, Param::Type(ret)), span).map(Mono::Function)
        } else {
            at(Tuple::new(params), start.merge(close)).map(Mono::Tuple)
        }
    }

    /// `name '[' ... ']'` for the built-in parameterized types.
    pub(super) fn parse_constructor(&mut self, name: &str, span: Span) -> ParseResult<Mono> {
        match name {
            "string" => self.parse_string_args(span),
            "time" | "datetime" => self.parse_timezone(name),
            "units" => self.parse_units(span),
            "complex" => self.parse_complex(span),
            _ => Err(self.cursor.unexpected("`*` or end of input")),
        }
    }

    /// `string[N]`, `string['ENC']`, `string[N, 'ENC']`
    fn parse_string_args(&mut self, start: Span) -> ParseResult<Mono> {
        self.cursor.expect(&TokenKind::LBracket, "`[`")?;
        let (fixlen, encoding) = match self.cursor.current_kind() {
            TokenKind::Int(n) => {
                self.cursor.advance();
                let encoding = if self.cursor.eat(&TokenKind::Comma) {
                    Some(self.expect_string("an encoding string")?)
                } else {
                    None
                };
                (Some(*n), encoding)
            }
            TokenKind::String(_) => (None, Some(self.expect_string("an encoding string")?)),
            _ => return Err(self.cursor.unexpected("a length or an encoding string")),
        };
        let end = self.cursor.expect(&TokenKind::RBracket, "`]`")?;
        let options = StringOptions {
            fixlen,
            encoding: encoding.as_deref(),
        };
        at(StringType::with_options(&options), start.merge(end)).map(Mono::String)
    }

    /// `time[tz='..']`, `datetime[tz='..']`
    fn parse_timezone(&mut self, name: &str) -> ParseResult<Mono> {
        self.cursor.expect(&TokenKind::LBracket, "`[`")?;
        match self.cursor.current_kind() {
            TokenKind::Ident(key) if &**key == "tz" => {
                self.cursor.advance();
            }
            _ => return Err(self.cursor.unexpected("`tz`")),
        }
        self.cursor.expect(&TokenKind::Eq, "`=`")?;
        let tz = self.expect_string("a timezone string")?;
        self.cursor.expect(&TokenKind::RBracket, "`]`")?;
        Ok(if name == "time" {
            Mono::Time(Some(tz))
        } else {
            Mono::DateTime(Some(tz))
        })
    }

    /// `units['unit']`, `units['unit', datashape]`
    fn parse_units(&mut self, start: Span) -> ParseResult<Mono> {
        self.cursor.expect(&TokenKind::LBracket, "`[`")?;
        let unit = self.expect_string("a unit string")?;
        let carrier = if self.cursor.eat(&TokenKind::Comma) {
            let carrier_span = self.cursor.current_span();
            let ty = self.parse_datashape()?;
            Some(at(DataShape::wrap(ty), carrier_span)?)
        } else {
            None
        };
        let end = self.cursor.expect(&TokenKind::RBracket, "`,` or `]`")?;
        at(Units::new(unit, carrier), start.merge(end)).map(Mono::Units)
    }

    /// `complex[float32]`, `complex[float64]`
    fn parse_complex(&mut self, start: Span) -> ParseResult<Mono> {
        self.cursor.expect(&TokenKind::LBracket, "`[`")?;
        let inner = match self.cursor.current_kind() {
            TokenKind::Ident(inner) => {
                self.cursor.advance();
                inner.clone()
            }
            _ => return Err(self.cursor.unexpected("a component type")),
        };
        let end = self.cursor.expect(&TokenKind::RBracket, "`]`")?;
        let name = format!("complex[{inner}]");
        self.registry.get(&name).ok_or_else(|| {
            SyntaxError::new(SyntaxErrorKind::UnknownName(name), start.merge(end))
        })
    }

    fn expect_string(&mut self, expected: &'static str) -> ParseResult<Arc<str>> {
        match self.cursor.current_kind() {
            TokenKind::String(s) => {
                self.cursor.advance();
                Ok(s.clone())
            }
            _ => Err(self.cursor.unexpected(expected)),
        }
    }
}
