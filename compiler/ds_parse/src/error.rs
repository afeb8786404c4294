//! Syntax errors.

use ds_lexer::Span;
use ds_types::DataShapeError;
use thiserror::Error;

/// What went wrong while parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// A token that does not fit the grammar at this point.
    #[error("expected {expected}, found {found}")]
    Unexpected { expected: &'static str, found: String },

    /// Characters that are not part of any token, including backslashes
    /// outside the `\'` and `\"` escapes.
    #[error("invalid character sequence `{0}`")]
    InvalidInput(String),

    /// A lowercase name that is not a registered type.
    #[error("unknown type `{0}`")]
    UnknownName(String),

    /// The type core rejected a well-formed construct.
    #[error(transparent)]
    Type(#[from] DataShapeError),
}

/// Parse failure with the source span it refers to.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        SyntaxError { kind, span }
    }

    /// Short label for the offending span.
    pub fn label(&self) -> &'static str {
        match self.kind {
            SyntaxErrorKind::Unexpected { .. } => "unexpected token",
            SyntaxErrorKind::InvalidInput(_) => "not valid here",
            SyntaxErrorKind::UnknownName(_) => "not a registered type",
            SyntaxErrorKind::Type(_) => "invalid type",
        }
    }
}

pub type ParseResult<T> = Result<T, SyntaxError>;
