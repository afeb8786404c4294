//! Lexer for datashape type expressions using logos.
//!
//! Produces a flat token list ending in [`TokenKind::Eof`]. Whitespace and
//! newlines are skipped. Quoted strings may use single or double quotes;
//! the only escapes are `\'` and `\"`, and any other backslash makes the
//! string an [`TokenKind::Error`] token.

mod token;

use logos::Logos;

pub use token::{Span, Token, TokenKind};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("*")]
    Star,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("?")]
    Question,
    #[token("=")]
    Eq,
    #[token("-")]
    Minus,
    #[token("->")]
    Arrow,
    #[token("...")]
    Ellipsis,

    // Out-of-range literals fail the callback and surface as errors.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    Int(u64),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r#"'([^'\\]|\\['"])*'"#)]
    SingleQuoted,

    #[regex(r#""([^"\\]|\\['"])*""#)]
    DoubleQuoted,
}

/// Tokenize `source`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();
        let kind = match result {
            Ok(raw) => convert(raw, slice),
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token::new(kind, span));
    }

    let end = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, end));
    tokens
}

fn convert(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Star => TokenKind::Star,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Question => TokenKind::Question,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Ident => TokenKind::Ident(slice.into()),
        RawToken::SingleQuoted | RawToken::DoubleQuoted => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::String(unescape(content).into())
        }
    }
}

/// Resolve `\'` and `\"` escapes. The lexer regex admits no others.
pub fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                result.push(escaped);
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
