//! Parser for datashape type expressions.
//!
//! ```text
//! parse("5 * var * { name : string, amount : float64 }")
//! ```
//!
//! Names are resolved through a [`TypeRegistry`]: the global one for
//! [`parse`] and [`dshape`], or an explicit one for [`parse_with`].
//! Rendering any parsed type with `Display` gives text that parses back to
//! an equal type.

mod cursor;
mod error;
mod grammar;
mod stack;

use ds_lexer::Span;
use ds_types::{registry, DataShape, Index, Mono, TypeRegistry};

pub use error::{ParseResult, SyntaxError, SyntaxErrorKind};

use grammar::Parser;

/// Parse a type expression against the global registry.
///
/// A lone measure is returned bare (`int32`); anything with dimensions is a
/// [`Mono::DataShape`].
pub fn parse(source: &str) -> ParseResult<Mono> {
    parse_with(registry::global(), source)
}

/// Parse a type expression, resolving names in `registry`.
#[tracing::instrument(level = "trace", skip(registry))]
pub fn parse_with(registry: &TypeRegistry, source: &str) -> ParseResult<Mono> {
    let tokens = ds_lexer::lex(source);
    let mut parser = Parser::new(source, &tokens, registry);
    let ty = parser.parse_datashape()?;
    parser.expect_end("`*` or end of input")?;
    Ok(ty)
}

/// Parse a type expression, always returning a datashape.
pub fn dshape(source: &str) -> ParseResult<DataShape> {
    let ty = parse(source)?;
    DataShape::wrap(ty).map_err(|err| {
        SyntaxError::new(
            SyntaxErrorKind::Type(err),
            Span::from_range(0..source.len()),
        )
    })
}

/// Parse an index expression such as `0:7:2, 'amount'`.
#[tracing::instrument(level = "trace")]
pub fn parse_index(source: &str) -> ParseResult<Index> {
    let tokens = ds_lexer::lex(source);
    let mut parser = Parser::new(source, &tokens, registry::global());
    let index = parser.parse_index()?;
    parser.expect_end("`,` or end of input")?;
    Ok(index)
}
