//! Native scalar types and the built-in type table.

use std::fmt;
use std::sync::Arc;

use crate::registry::{self, TypeRegistry};
use crate::{Mono, Result};

/// Symbol for a sized type mapping to a native scalar.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CType {
    name: Arc<str>,
    itemsize: u32,
    alignment: u32,
}

impl CType {
    /// Create a scalar without registering it.
    pub fn new(name: impl Into<Arc<str>>, itemsize: u32, alignment: u32) -> Self {
        CType {
            name: name.into(),
            itemsize,
            alignment,
        }
    }

    /// Create a scalar and bind it by name in the global registry.
    pub fn register(name: &str, itemsize: u32, alignment: u32) -> Result<Self> {
        let ctype = CType::new(name, itemsize, alignment);
        registry::global().register(name, Mono::CType(ctype.clone()))?;
        Ok(ctype)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of one element in bytes.
    pub const fn itemsize(&self) -> u32 {
        self.itemsize
    }

    /// Alignment of one element in bytes.
    pub const fn alignment(&self) -> u32 {
        self.alignment
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

const POINTER_SIZE: u32 = usize::BITS / 8;

#[cfg(target_pointer_width = "64")]
const POINTER_INTS: (&str, &str) = ("int64", "uint64");
#[cfg(not(target_pointer_width = "64"))]
const POINTER_INTS: (&str, &str) = ("int32", "uint32");

macro_rules! builtin_ctypes {
    ($($func:ident => ($name:literal, $size:expr, $align:expr)),* $(,)?) => {
        /// (name, itemsize, alignment) of every built-in scalar.
        pub(crate) const BUILTIN_CTYPES: &[(&str, u32, u32)] = &[$(($name, $size, $align)),*];

        /// Constructors for the built-in types.
        ///
        /// These build values equal to the registered instances, so
        /// `builtin::int32() == registry::global().lookup("int32")?`.
        pub mod builtin {
            use super::POINTER_SIZE;
            use crate::{CType, Mono, StringType};

            $(
                #[doc = concat!("The `", $name, "` scalar.")]
                pub fn $func() -> Mono {
                    Mono::CType(CType::new($name, $size, $align))
                }
            )*

            /// Unbounded UTF-8 `string`.
            pub fn string() -> Mono {
                Mono::String(StringType::new())
            }

            /// The variable-length dimension.
            pub fn var() -> Mono {
                Mono::Var
            }

            pub fn date() -> Mono {
                Mono::Date
            }

            /// `time` without a timezone.
            pub fn time() -> Mono {
                Mono::Time(None)
            }

            /// `datetime` without a timezone.
            pub fn datetime() -> Mono {
                Mono::DateTime(None)
            }

            pub fn bytes() -> Mono {
                Mono::Bytes
            }

            pub fn json() -> Mono {
                Mono::Json
            }

            pub fn null() -> Mono {
                Mono::Null
            }
        }
    };
}

builtin_ctypes! {
    bool_ => ("bool", 1, 1),
    char => ("char", 1, 1),
    int8 => ("int8", 1, 1),
    int16 => ("int16", 2, 2),
    int32 => ("int32", 4, 4),
    int64 => ("int64", 8, 8),
    uint8 => ("uint8", 1, 1),
    uint16 => ("uint16", 2, 2),
    uint32 => ("uint32", 4, 4),
    uint64 => ("uint64", 8, 8),
    float16 => ("float16", 2, 2),
    float32 => ("float32", 4, 4),
    float64 => ("float64", 8, 8),
    complex64 => ("complex[float32]", 8, 4),
    complex128 => ("complex[float64]", 16, 8),
    void => ("void", 0, 1),
    object => ("object", POINTER_SIZE, POINTER_SIZE),
}

/// Alternative names bound to built-in scalars.
const ALIASES: &[(&str, &str)] = &[
    ("int", "int32"),
    ("real", "float64"),
    ("double", "float64"),
    ("float", "float32"),
    ("complex64", "complex[float32]"),
    ("complex128", "complex[float64]"),
    ("complex", "complex[float64]"),
    ("intptr", POINTER_INTS.0),
    ("uintptr", POINTER_INTS.1),
];

/// Bind every built-in name in `registry`.
pub(crate) fn seed(registry: &mut TypeRegistry) {
    for &(name, itemsize, alignment) in BUILTIN_CTYPES {
        registry.insert_builtin(name, Mono::CType(CType::new(name, itemsize, alignment)));
    }
    for &(alias, target) in ALIASES {
        if let Some(ty) = registry.get(target) {
            registry.insert_builtin(alias, ty);
        }
    }
    for (name, ty) in [
        ("date", builtin::date()),
        ("time", builtin::time()),
        ("datetime", builtin::datetime()),
        ("null", builtin::null()),
        ("bytes", builtin::bytes()),
        ("string", builtin::string()),
        ("json", builtin::json()),
        ("var", builtin::var()),
    ] {
        registry.insert_builtin(name, ty);
    }
}
