//! Errors raised while building and querying datashapes.
//!
//! Every failure is a contract violation by the caller or an unsupported
//! input. Nothing is retried and no partially built node is ever returned.

use thiserror::Error;

/// Error produced by the datashape core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DataShapeError {
    /// Malformed composite: a node of the wrong kind in some position, or the
    /// wrong number of parameters.
    #[error("{0}")]
    Construction(String),

    /// A type name that is not in the registry.
    #[error("unknown type `{0}`")]
    UnknownType(String),

    /// A registry name that is already bound.
    #[error("there is another type registered with name `{0}`")]
    DuplicateName(String),

    /// A string encoding outside ascii and the utf-8/16/32 spellings.
    #[error("unsupported string encoding `{0}`")]
    UnsupportedEncoding(String),

    /// `subarray`/`subshape` index out of range.
    #[error("{0}")]
    Index(String),

    /// Projection of a record field that does not exist.
    #[error("record has no field named `{0}`")]
    UnknownField(String),

    /// An index form the subshape algebra does not cover.
    #[error("indexing `{datashape}` with `{index}` is not supported")]
    NotImplemented { datashape: String, index: String },

    /// A datashape that has no native layout, or a native layout with no
    /// datashape.
    #[error("{0}")]
    IncompatibleLayout(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = DataShapeError> = std::result::Result<T, E>;
