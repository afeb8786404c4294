//! Command handlers.
//!
//! Every handler returns the text to print on success. Syntax errors keep the
//! source they came from so the binary can render a labelled report.

use std::fmt::Write;

use ds_parse::SyntaxError;
use ds_types::{to_native_layout, DataShapeError, Mono};
use thiserror::Error;

/// Failure of a single command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{error}")]
    Syntax { text: String, error: SyntaxError },

    #[error(transparent)]
    Type(#[from] DataShapeError),
}

impl CommandError {
    fn syntax(source: &str, error: SyntaxError) -> Self {
        CommandError::Syntax {
            text: source.to_owned(),
            error,
        }
    }
}

fn parse(source: &str) -> Result<Mono, CommandError> {
    ds_parse::parse(source).map_err(|err| CommandError::syntax(source, err))
}

/// Canonical form, shape, measure and free variables of a type.
pub fn show(source: &str) -> Result<String, CommandError> {
    let ty = parse(source)?;
    let shape: Vec<String> = ty.shape().iter().map(ToString::to_string).collect();
    let vars: Vec<String> = ty.free_vars().iter().map(ToString::to_string).collect();

    let mut out = String::new();
    let _ = writeln!(out, "type:      {ty}");
    let _ = writeln!(out, "kind:      {}", ty.tag());
    let _ = writeln!(out, "ndim:      {}", ty.shape().len());
    let _ = writeln!(out, "shape:     ({})", shape.join(", "));
    let _ = writeln!(out, "measure:   {}", ty.measure());
    if vars.is_empty() {
        let _ = writeln!(out, "free vars: none");
    } else {
        let _ = writeln!(out, "free vars: {}", vars.join(", "));
    }
    Ok(out)
}

/// Signature form of a type.
pub fn sigform(source: &str) -> Result<String, CommandError> {
    Ok(format!("{}\n", parse(source)?.sigform()))
}

/// Type of the part of an array selected by `index`.
pub fn subshape(source: &str, index: &str) -> Result<String, CommandError> {
    let ds = ds_parse::dshape(source).map_err(|err| CommandError::syntax(source, err))?;
    let index = ds_parse::parse_index(index).map_err(|err| CommandError::syntax(index, err))?;
    let result = ds.subshape(&index)?;
    tracing::debug!(%ds, %index, %result, "subshape");
    Ok(format!("{result}\n"))
}

/// Native array layout of a type.
pub fn layout(source: &str) -> Result<String, CommandError> {
    let layout = to_native_layout(&parse(source)?)?;
    Ok(format!("{layout}\n"))
}

/// Token stream of an expression, one token per line.
pub fn lex(source: &str) -> String {
    let tokens = ds_lexer::lex(source);
    let mut out = String::new();
    let _ = writeln!(out, "{} tokens", tokens.len());
    for token in &tokens {
        let _ = writeln!(out, "  {:?} @ {:?}", token.kind, token.span);
    }
    out
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
