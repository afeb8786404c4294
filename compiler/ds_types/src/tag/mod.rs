//! Variant tag and placement kind.
//!
//! `Tag` names the constructor of a [`Mono`](crate::Mono) node; together with
//! the node's parameters it is enough to rebuild the node. It is also the
//! "type constructor" unification keys on.
//!
//! # Tag Ranges
//!
//! - 0-15: Dimensions
//! - 16-31: Free nodes (valid as dimension or measure)
//! - 32-63: Unit measures
//! - 64-79: Constructor literals
//! - 80-95: Composites

use std::fmt;

/// Where a node may appear inside a datashape.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    /// Shape-describing unit preceding the measure.
    Dimension,
    /// Element type trailing all dimensions.
    Measure,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Dimension => f.write_str("dimension"),
            Kind::Measure => f.write_str("measure"),
        }
    }
}

/// Node constructor discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    // === Dimensions (0-15) ===
    /// Statically known length.
    Fixed = 0,
    /// Dynamically sized dimension.
    Var = 1,
    /// Any number of dimensions.
    Ellipsis = 2,

    // === Free (16-31) ===
    /// Type variable.
    TypeVar = 16,
    /// Typeset constraint on a type variable.
    Implements = 17,

    // === Unit measures (32-63) ===
    /// Native scalar.
    CType = 32,
    /// Text.
    String = 33,
    /// Calendar date.
    Date = 34,
    /// Time of day.
    Time = 35,
    /// Date and time.
    DateTime = 36,
    /// Value carrying a physical unit.
    Units = 37,
    /// Opaque bytes.
    Bytes = 38,
    /// JSON document.
    Json = 39,
    /// The null measure.
    Null = 40,

    // === Constructor literals (64-79) ===
    /// Integer literal parameter.
    IntegerConstant = 64,
    /// String literal parameter.
    StringConstant = 65,

    // === Composites (80-95) ===
    /// Nullable wrapper.
    Option = 80,
    /// Named fields.
    Record = 81,
    /// Unnamed fields.
    Tuple = 82,
    /// Callable signature.
    Function = 83,
    /// Dimensions plus measure.
    DataShape = 84,
}

impl Tag {
    /// Placement kind of nodes with this tag, `None` for free nodes.
    #[inline]
    pub const fn kind(self) -> Option<Kind> {
        match self {
            Self::Fixed | Self::Var | Self::Ellipsis | Self::IntegerConstant => {
                Some(Kind::Dimension)
            }
            Self::TypeVar | Self::Implements => None,
            _ => Some(Kind::Measure),
        }
    }

    /// Nodes with this tag may only appear before the measure.
    #[inline]
    pub const fn is_dimension(self) -> bool {
        matches!(self.kind(), Some(Kind::Dimension))
    }

    /// Nodes with this tag may only appear in the last position.
    #[inline]
    pub const fn is_measure(self) -> bool {
        matches!(self.kind(), Some(Kind::Measure))
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Var => "Var",
            Self::Ellipsis => "Ellipsis",
            Self::TypeVar => "TypeVar",
            Self::Implements => "Implements",
            Self::CType => "CType",
            Self::String => "String",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateTime => "DateTime",
            Self::Units => "Units",
            Self::Bytes => "Bytes",
            Self::Json => "JSON",
            Self::Null => "Null",
            Self::IntegerConstant => "IntegerConstant",
            Self::StringConstant => "StringConstant",
            Self::Option => "Option",
            Self::Record => "Record",
            Self::Tuple => "Tuple",
            Self::Function => "Function",
            Self::DataShape => "DataShape",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<Tag>() == 1);

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
