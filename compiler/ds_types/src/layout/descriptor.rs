//! Native element descriptors.

use std::fmt;
use std::sync::Arc;

/// Fixed-size native scalar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
    Complex64,
    Complex128,
    Void,
    Object,
}

impl ScalarKind {
    /// Scalar for a built-in `CType` name.
    pub fn from_ctype_name(name: &str) -> Option<Self> {
        Some(match name {
            "bool" => ScalarKind::Bool,
            "int8" => ScalarKind::Int8,
            "int16" => ScalarKind::Int16,
            "int32" => ScalarKind::Int32,
            "int64" => ScalarKind::Int64,
            "uint8" => ScalarKind::UInt8,
            "uint16" => ScalarKind::UInt16,
            "uint32" => ScalarKind::UInt32,
            "uint64" => ScalarKind::UInt64,
            "float16" => ScalarKind::Float16,
            "float32" => ScalarKind::Float32,
            "float64" => ScalarKind::Float64,
            "complex[float32]" => ScalarKind::Complex64,
            "complex[float64]" => ScalarKind::Complex128,
            "void" => ScalarKind::Void,
            "object" => ScalarKind::Object,
            _ => return None,
        })
    }

    /// Descriptor name, as the native layer spells it.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int8 => "int8",
            ScalarKind::Int16 => "int16",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::UInt8 => "uint8",
            ScalarKind::UInt16 => "uint16",
            ScalarKind::UInt32 => "uint32",
            ScalarKind::UInt64 => "uint64",
            ScalarKind::Float16 => "float16",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
            ScalarKind::Complex64 => "complex64",
            ScalarKind::Complex128 => "complex128",
            ScalarKind::Void => "void",
            ScalarKind::Object => "object",
        }
    }

    pub const fn itemsize(self) -> u64 {
        match self {
            ScalarKind::Void => 0,
            ScalarKind::Bool | ScalarKind::Int8 | ScalarKind::UInt8 => 1,
            ScalarKind::Int16 | ScalarKind::UInt16 | ScalarKind::Float16 => 2,
            ScalarKind::Int32 | ScalarKind::UInt32 | ScalarKind::Float32 => 4,
            ScalarKind::Int64 | ScalarKind::UInt64 | ScalarKind::Float64 => 8,
            ScalarKind::Complex64 => 8,
            ScalarKind::Complex128 => 16,
            ScalarKind::Object => (usize::BITS / 8) as u64,
        }
    }
}

/// Resolution of a `datetime64` element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
    Picosecond,
    Femtosecond,
    Attosecond,
}

impl TimeUnit {
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "Y" => TimeUnit::Year,
            "M" => TimeUnit::Month,
            "W" => TimeUnit::Week,
            "D" => TimeUnit::Day,
            "h" => TimeUnit::Hour,
            "m" => TimeUnit::Minute,
            "s" => TimeUnit::Second,
            "ms" => TimeUnit::Millisecond,
            "us" => TimeUnit::Microsecond,
            "ns" => TimeUnit::Nanosecond,
            "ps" => TimeUnit::Picosecond,
            "fs" => TimeUnit::Femtosecond,
            "as" => TimeUnit::Attosecond,
            _ => return None,
        })
    }

    pub const fn code(self) -> &'static str {
        match self {
            TimeUnit::Year => "Y",
            TimeUnit::Month => "M",
            TimeUnit::Week => "W",
            TimeUnit::Day => "D",
            TimeUnit::Hour => "h",
            TimeUnit::Minute => "m",
            TimeUnit::Second => "s",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Microsecond => "us",
            TimeUnit::Nanosecond => "ns",
            TimeUnit::Picosecond => "ps",
            TimeUnit::Femtosecond => "fs",
            TimeUnit::Attosecond => "as",
        }
    }

    /// Day or coarser.
    pub const fn is_calendar(self) -> bool {
        matches!(
            self,
            TimeUnit::Year | TimeUnit::Month | TimeUnit::Week | TimeUnit::Day
        )
    }
}

/// A named member of a struct element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructField {
    pub name: Arc<str>,
    pub element: ElementDescriptor,
}

/// Type of one array element in a fixed-layout array.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementDescriptor {
    Scalar(ScalarKind),
    /// Fixed-width byte string, `S{n}`.
    Bytes(u64),
    /// Fixed-width UCS-4 text, `U{n}` characters.
    Unicode(u64),
    /// Pointer to variable-length text.
    VarString,
    DateTime64(Option<TimeUnit>),
    /// Packed fields in declaration order.
    Struct(Vec<StructField>),
}

impl ElementDescriptor {
    /// Name used for registry lookup.
    pub fn name(&self) -> String {
        match self {
            ElementDescriptor::Scalar(kind) => kind.name().to_owned(),
            ElementDescriptor::Bytes(n) => format!("S{n}"),
            ElementDescriptor::Unicode(n) => format!("U{n}"),
            ElementDescriptor::VarString => "string".to_owned(),
            ElementDescriptor::DateTime64(None) => "datetime64".to_owned(),
            ElementDescriptor::DateTime64(Some(unit)) => format!("datetime64[{}]", unit.code()),
            ElementDescriptor::Struct(_) => "void".to_owned(),
        }
    }

    /// Size of one element in bytes.
    pub fn itemsize(&self) -> u64 {
        match self {
            ElementDescriptor::Scalar(kind) => kind.itemsize(),
            ElementDescriptor::Bytes(n) => *n,
            ElementDescriptor::Unicode(n) => n.saturating_mul(4),
            ElementDescriptor::VarString => ScalarKind::Object.itemsize(),
            ElementDescriptor::DateTime64(_) => 8,
            ElementDescriptor::Struct(fields) => fields
                .iter()
                .map(|field| field.element.itemsize())
                .fold(0, u64::saturating_add),
        }
    }
}

impl fmt::Display for ElementDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementDescriptor::Struct(fields) => {
                f.write_str("[")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "('{}', {})", field.name, field.element)?;
                }
                f.write_str("]")
            }
            other => f.write_str(&other.name()),
        }
    }
}

/// Length of one axis of a native array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Extent {
    Fixed(u64),
    /// Unknown length, rendered as `-1`.
    Any,
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Fixed(n) => write!(f, "{n}"),
            Extent::Any => f.write_str("-1"),
        }
    }
}
