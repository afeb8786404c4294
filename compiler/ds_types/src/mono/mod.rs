//! The monotype node set.
//!
//! `Mono` is a closed sum over every node the datashape grammar can build.
//! Unit nodes (dimensions, scalars, temporal types, ...) are small values;
//! composite nodes keep their children behind `Arc`.
//!
//! # Equality
//!
//! Equality and hashing are structural. A `DataShape` name is not part of its
//! identity. `Fixed` and `IntegerConstant` also compare equal to a bare
//! integer, and `StringConstant` to a bare string.

mod format;

use std::sync::Arc;

use crate::{
    launder, DataShape, DataShapeError, Function, Implements, Kind, Param, Record, Result,
    StringType, Tag, Tuple, TypeVar, Units, CType,
};

pub(crate) use format::{write_field_name, write_quoted};

/// A datashape type node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mono {
    /// Statically known dimension length.
    Fixed(u64),
    /// Dynamically sized dimension.
    Var,
    /// Free type variable, dimension or measure.
    TypeVar(TypeVar),
    /// Any number of dimensions, optionally bound to a type variable.
    Ellipsis(Option<TypeVar>),
    /// Native scalar.
    CType(CType),
    /// Text.
    String(StringType),
    Date,
    /// Time of day, with an optional timezone.
    Time(Option<Arc<str>>),
    /// Date and time, with an optional timezone.
    DateTime(Option<Arc<str>>),
    /// Value with a physical unit.
    Units(Units),
    Bytes,
    Json,
    Null,
    /// Integer parameter of a type constructor.
    IntegerConstant(i64),
    /// String parameter of a type constructor.
    StringConstant(Arc<str>),
    /// Nullable measure.
    Option(Arc<Mono>),
    Record(Record),
    Tuple(Tuple),
    Function(Function),
    DataShape(DataShape),
    Implements(Implements),
}

impl Mono {
    /// Nullable wrapper around a laundered measure.
    pub fn option(inner: impl Into<Param>) -> Result<Mono> {
        let inner = launder(inner.into())?;
        if inner.tag().is_dimension() {
            return Err(DataShapeError::Construction(format!(
                "only a measure can be optional, not the dimension `{inner}`"
            )));
        }
        if !inner.shape().is_empty() {
            return Err(DataShapeError::Construction(format!(
                "only a measure can be optional, not the array `{inner}`"
            )));
        }
        Ok(Mono::Option(Arc::new(inner)))
    }

    /// Type variable node; the symbol must begin with a capital.
    pub fn typevar(symbol: &str) -> Result<Mono> {
        TypeVar::new(symbol).map(Mono::TypeVar)
    }

    /// Constructor of this node.
    pub fn tag(&self) -> Tag {
        match self {
            Mono::Fixed(_) => Tag::Fixed,
            Mono::Var => Tag::Var,
            Mono::TypeVar(_) => Tag::TypeVar,
            Mono::Ellipsis(_) => Tag::Ellipsis,
            Mono::CType(_) => Tag::CType,
            Mono::String(_) => Tag::String,
            Mono::Date => Tag::Date,
            Mono::Time(_) => Tag::Time,
            Mono::DateTime(_) => Tag::DateTime,
            Mono::Units(_) => Tag::Units,
            Mono::Bytes => Tag::Bytes,
            Mono::Json => Tag::Json,
            Mono::Null => Tag::Null,
            Mono::IntegerConstant(_) => Tag::IntegerConstant,
            Mono::StringConstant(_) => Tag::StringConstant,
            Mono::Option(_) => Tag::Option,
            Mono::Record(_) => Tag::Record,
            Mono::Tuple(_) => Tag::Tuple,
            Mono::Function(_) => Tag::Function,
            Mono::DataShape(_) => Tag::DataShape,
            Mono::Implements(_) => Tag::Implements,
        }
    }

    /// Placement kind; `None` for type variables, which fit either position.
    #[inline]
    pub fn kind(&self) -> Option<Kind> {
        self.tag().kind()
    }

    /// Leading dimensions. Empty for everything but datashapes; an option
    /// reports the shape of what it wraps.
    pub fn shape(&self) -> &[Mono] {
        match self {
            Mono::DataShape(ds) => ds.shape(),
            Mono::Option(inner) => inner.shape(),
            _ => &[],
        }
    }

    /// Trailing measure. Nodes other than datashapes are their own measure.
    pub fn measure(&self) -> &Mono {
        match self {
            Mono::DataShape(ds) => ds.measure(),
            _ => self,
        }
    }

    /// Remove `leading` dimensions.
    ///
    /// A bare measure has no dimensions, so only `leading == 0` succeeds and
    /// returns the node itself.
    pub fn subarray(&self, leading: usize) -> Result<Mono> {
        match self {
            Mono::DataShape(ds) => ds.subarray(leading).map(Mono::DataShape),
            _ if leading == 0 => Ok(self.clone()),
            _ => Err(DataShapeError::Index(format!(
                "Not enough dimensions in data shape to remove {leading} leading dimensions."
            ))),
        }
    }

    /// Signature form: dimensions replaced by positional type variables.
    pub fn sigform(&self) -> Mono {
        match self {
            Mono::DataShape(ds) => Mono::DataShape(ds.sigform()),
            _ => self.clone(),
        }
    }

    /// Free type variables, depth first, in order of appearance.
    ///
    /// Looks through composites but not into unit types such as `units`.
    pub fn free_vars(&self) -> Vec<TypeVar> {
        let mut vars = Vec::new();
        self.collect_free_vars(&mut vars);
        vars
    }

    fn collect_free_vars(&self, vars: &mut Vec<TypeVar>) {
        match self {
            Mono::TypeVar(tv) | Mono::Ellipsis(Some(tv)) => vars.push(tv.clone()),
            Mono::Implements(constraint) => vars.push(constraint.typevar().clone()),
            Mono::Option(inner) => inner.collect_free_vars(vars),
            Mono::Record(rec) => {
                for ty in rec.types() {
                    ty.collect_free_vars(vars);
                }
            }
            Mono::Tuple(tuple) => {
                for ds in tuple.elements() {
                    for param in ds.params() {
                        param.collect_free_vars(vars);
                    }
                }
            }
            Mono::Function(func) => {
                for param in func.params() {
                    param.collect_free_vars(vars);
                }
            }
            Mono::DataShape(ds) => {
                for param in ds.params() {
                    param.collect_free_vars(vars);
                }
            }
            _ => {}
        }
    }

    pub fn as_datashape(&self) -> Option<&DataShape> {
        match self {
            Mono::DataShape(ds) => Some(ds),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Mono::Record(rec) => Some(rec),
            _ => None,
        }
    }
}

impl PartialEq<u64> for Mono {
    fn eq(&self, other: &u64) -> bool {
        match self {
            Mono::Fixed(n) => n == other,
            Mono::IntegerConstant(n) => u64::try_from(*n).is_ok_and(|n| n == *other),
            _ => false,
        }
    }
}

impl PartialEq<str> for Mono {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Mono::StringConstant(s) if &**s == other)
    }
}

impl PartialEq<&str> for Mono {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl From<CType> for Mono {
    fn from(ctype: CType) -> Self {
        Mono::CType(ctype)
    }
}

impl From<StringType> for Mono {
    fn from(string: StringType) -> Self {
        Mono::String(string)
    }
}

impl From<TypeVar> for Mono {
    fn from(tv: TypeVar) -> Self {
        Mono::TypeVar(tv)
    }
}

impl From<Record> for Mono {
    fn from(rec: Record) -> Self {
        Mono::Record(rec)
    }
}

impl From<Tuple> for Mono {
    fn from(tuple: Tuple) -> Self {
        Mono::Tuple(tuple)
    }
}

impl From<Function> for Mono {
    fn from(func: Function) -> Self {
        Mono::Function(func)
    }
}

impl From<DataShape> for Mono {
    fn from(ds: DataShape) -> Self {
        Mono::DataShape(ds)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
