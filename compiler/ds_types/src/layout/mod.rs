//! Conversion between datashapes and fixed-layout native array descriptors.
//!
//! A native layout is a shape (one extent per axis) plus an element
//! descriptor. Only datashapes whose dimensions are all fixed (or type
//! variables, which become wildcard extents) and whose measure has a fixed
//! binary layout can be converted.

mod descriptor;

use std::fmt;

use smallvec::SmallVec;

pub use descriptor::{ElementDescriptor, Extent, ScalarKind, StructField, TimeUnit};

use crate::registry;
use crate::{DataShape, DataShapeError, Encoding, Field, Mono, Record, Result, StringType};

/// Shape and element type of a native array.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NativeLayout {
    pub shape: SmallVec<[Extent; 4]>,
    pub element: ElementDescriptor,
}

impl fmt::Display for NativeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, extent) in self.shape.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{extent}")?;
        }
        if self.shape.len() == 1 {
            f.write_str(",")?;
        }
        write!(f, ") {}", self.element)
    }
}

fn incompatible(ty: &Mono, what: &str) -> DataShapeError {
    DataShapeError::IncompatibleLayout(format!("{what} `{ty}` has no native layout"))
}

/// Native layout of a datashape (or of a bare measure).
#[tracing::instrument(level = "trace", skip_all, fields(ty = %ty))]
pub fn to_native_layout(ty: &Mono) -> Result<NativeLayout> {
    let shape = ty
        .shape()
        .iter()
        .map(|dim| match dim {
            Mono::Fixed(n) => Ok(Extent::Fixed(*n)),
            Mono::IntegerConstant(n) => u64::try_from(*n)
                .map(Extent::Fixed)
                .map_err(|_| incompatible(dim, "negative dimension")),
            Mono::TypeVar(_) => Ok(Extent::Any),
            other => Err(incompatible(other, "dimension")),
        })
        .collect::<Result<SmallVec<_>>>()?;
    let element = element_of(ty.measure())?;
    Ok(NativeLayout { shape, element })
}

/// Element descriptor of the measure, ignoring any dimensions.
pub fn to_native_element(ty: &Mono) -> Result<ElementDescriptor> {
    element_of(ty.measure())
}

fn element_of(measure: &Mono) -> Result<ElementDescriptor> {
    match measure {
        Mono::CType(ctype) if ctype.name() == "char" => Ok(ElementDescriptor::Bytes(1)),
        Mono::CType(ctype) => ScalarKind::from_ctype_name(ctype.name())
            .map(ElementDescriptor::Scalar)
            .ok_or_else(|| incompatible(measure, "scalar")),
        Mono::String(string) => Ok(match string.fixlen() {
            Some(n) if n > 0 && string.encoding() == Encoding::Ascii => ElementDescriptor::Bytes(n),
            Some(n) if n > 0 => ElementDescriptor::Unicode(n),
            _ => ElementDescriptor::VarString,
        }),
        Mono::Date => Ok(ElementDescriptor::DateTime64(Some(TimeUnit::Day))),
        Mono::DateTime(_) => Ok(ElementDescriptor::DateTime64(Some(TimeUnit::Microsecond))),
        Mono::Record(rec) => rec
            .fields()
            .iter()
            .map(|field| {
                if !field.ty.shape().is_empty() {
                    return Err(incompatible(&field.ty, "record field"));
                }
                Ok(StructField {
                    name: field.name.clone(),
                    element: element_of(field.ty.measure())?,
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(ElementDescriptor::Struct),
        other => Err(incompatible(other, "measure")),
    }
}

/// Datashape for a native array.
///
/// An empty shape gives the bare measure; otherwise the measure is wrapped
/// in fixed dimensions. Wildcard extents have no datashape equivalent.
#[tracing::instrument(level = "trace", skip_all, fields(element = %element))]
pub fn from_native_layout(shape: &[Extent], element: &ElementDescriptor) -> Result<Mono> {
    let measure = measure_of(element)?;
    if shape.is_empty() {
        return Ok(measure);
    }
    let mut elements = shape
        .iter()
        .map(|extent| match extent {
            Extent::Fixed(n) => Ok(Mono::Fixed(*n)),
            Extent::Any => Err(DataShapeError::IncompatibleLayout(
                "a wildcard extent has no datashape equivalent".into(),
            )),
        })
        .collect::<Result<Vec<_>>>()?;
    elements.push(measure);
    DataShape::from_elements(elements).map(Mono::DataShape)
}

fn measure_of(element: &ElementDescriptor) -> Result<Mono> {
    match element {
        ElementDescriptor::Struct(fields) => {
            let fields = fields
                .iter()
                .map(|field| Ok(Field::new(field.name.clone(), measure_of(&field.element)?)))
                .collect::<Result<Vec<_>>>()?;
            Record::from_fields(fields).map(Mono::Record)
        }
        ElementDescriptor::Bytes(n) => {
            Ok(Mono::String(StringType::fixed_encoded(*n, Encoding::Ascii.code())?))
        }
        ElementDescriptor::Unicode(n) => {
            Ok(Mono::String(StringType::fixed_encoded(*n, Encoding::Utf32.code())?))
        }
        other => {
            if let Some(ty) = registry::global().get(&other.name()) {
                return Ok(ty);
            }
            match other {
                ElementDescriptor::DateTime64(Some(unit)) if unit.is_calendar() => Ok(Mono::Date),
                ElementDescriptor::DateTime64(_) => Ok(Mono::DateTime(None)),
                _ => Err(DataShapeError::IncompatibleLayout(format!(
                    "no datashape for native element `{other}`"
                ))),
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
