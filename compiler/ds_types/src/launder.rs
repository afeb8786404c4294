//! Raw constructor parameters, laundering and reconstruction.
//!
//! Composite constructors accept [`Param`]s and launder each one into a
//! canonical node:
//!
//! - integer → `Fixed`
//! - name → registry lookup
//! - single-element datashape → its element
//! - anything else → unchanged
//!
//! The same `Param` type is what [`Mono::parameters`] returns, and
//! [`Mono::from_parameters`] rebuilds a node from it.

use std::sync::Arc;

use crate::registry::{self, TypeRegistry};
use crate::{
    CType, DataShape, DataShapeError, Field, Function, Implements, Mono, Record, Result,
    StringOptions, StringType, Tag, Tuple, TypeSet, TypeVar, Units,
};

/// A constructor parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    /// Integer literal, wide enough for any length or constant.
    Int(i128),
    /// Name, symbol, encoding, or other text.
    Str(Arc<str>),
    /// An existing node.
    Type(Mono),
    /// Record fields.
    Fields(Vec<Field>),
    /// Typeset of a constraint.
    TypeSet(TypeSet),
    /// An optional parameter that is not set.
    Absent,
}

impl From<i64> for Param {
    fn from(n: i64) -> Self {
        Param::Int(i128::from(n))
    }
}

impl From<u64> for Param {
    fn from(n: u64) -> Self {
        Param::Int(i128::from(n))
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::Str(s.into())
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::Str(s.into())
    }
}

impl From<Mono> for Param {
    fn from(ty: Mono) -> Self {
        Param::Type(ty)
    }
}

impl From<DataShape> for Param {
    fn from(ds: DataShape) -> Self {
        Param::Type(Mono::DataShape(ds))
    }
}

impl From<Record> for Param {
    fn from(rec: Record) -> Self {
        Param::Type(Mono::Record(rec))
    }
}

/// Launder a parameter against the global registry.
pub fn launder(param: Param) -> Result<Mono> {
    launder_with(registry::global(), param)
}

/// Launder a parameter, resolving names in `registry`.
///
/// Idempotent: laundering an already canonical node returns it unchanged.
pub fn launder_with(registry: &TypeRegistry, param: Param) -> Result<Mono> {
    match param {
        Param::Int(n) => fixed_length(n).map(Mono::Fixed),
        Param::Str(name) => registry.lookup(&name),
        Param::Type(Mono::DataShape(ds)) if ds.len() == 1 => Ok(ds.measure().clone()),
        Param::Type(ty) => Ok(ty),
        other @ (Param::Fields(_) | Param::TypeSet(_) | Param::Absent) => {
            Err(DataShapeError::Construction(format!(
                "cannot use {other:?} as a type"
            )))
        }
    }
}

fn fixed_length(n: i128) -> Result<u64> {
    u64::try_from(n).map_err(|_| {
        DataShapeError::Construction(format!("Fixed dimensions must be positive, not {n}"))
    })
}

fn int_param(n: u64) -> Param {
    Param::Int(i128::from(n))
}

fn optional_str(s: Option<&Arc<str>>) -> Param {
    s.map_or(Param::Absent, |s| Param::Str(s.clone()))
}

impl Mono {
    /// Ordered parameters that rebuild this node with [`Mono::from_parameters`].
    pub fn parameters(&self) -> Vec<Param> {
        match self {
            Mono::Fixed(n) => vec![int_param(*n)],
            Mono::Var | Mono::Date | Mono::Bytes | Mono::Json | Mono::Null => Vec::new(),
            Mono::TypeVar(tv) => vec![Param::Str(tv.symbol().into())],
            Mono::Ellipsis(tv) => vec![tv
                .clone()
                .map_or(Param::Absent, |tv| Param::Type(Mono::TypeVar(tv)))],
            Mono::CType(ctype) => vec![
                Param::Str(ctype.name().into()),
                Param::Int(i128::from(ctype.itemsize())),
                Param::Int(i128::from(ctype.alignment())),
            ],
            Mono::String(string) => vec![
                string.fixlen().map_or(Param::Absent, int_param),
                Param::Str(string.encoding().code().into()),
            ],
            Mono::Time(tz) | Mono::DateTime(tz) => vec![optional_str(tz.as_ref())],
            Mono::Units(units) => vec![
                Param::Str(units.unit().into()),
                Param::Type(Mono::DataShape(units.carrier().clone())),
            ],
            Mono::IntegerConstant(n) => vec![Param::Int(i128::from(*n))],
            Mono::StringConstant(s) => vec![Param::Str(s.clone())],
            Mono::Option(inner) => vec![Param::Type((**inner).clone())],
            Mono::Record(rec) => vec![Param::Fields(rec.fields().to_vec())],
            Mono::Tuple(tuple) => tuple
                .elements()
                .iter()
                .map(|ds| Param::Type(Mono::DataShape(ds.clone())))
                .collect(),
            Mono::Function(func) => func.params().iter().cloned().map(Param::Type).collect(),
            Mono::DataShape(ds) => ds.params().iter().cloned().map(Param::Type).collect(),
            Mono::Implements(constraint) => vec![
                Param::Type(Mono::TypeVar(constraint.typevar().clone())),
                Param::TypeSet(constraint.typeset().clone()),
            ],
        }
    }

    /// Rebuild a node from its constructor tag and parameters.
    pub fn from_parameters(tag: Tag, params: Vec<Param>) -> Result<Mono> {
        let mismatch = |params: &[Param]| {
            DataShapeError::Construction(format!(
                "{tag} cannot be constructed from parameters {params:?}"
            ))
        };
        match tag {
            Tag::Fixed => match params.as_slice() {
                [Param::Int(n)] => fixed_length(*n).map(Mono::Fixed),
                other => Err(mismatch(other)),
            },
            Tag::Var | Tag::Date | Tag::Bytes | Tag::Json | Tag::Null if !params.is_empty() => {
                Err(mismatch(&params))
            }
            Tag::Var => Ok(Mono::Var),
            Tag::Date => Ok(Mono::Date),
            Tag::Bytes => Ok(Mono::Bytes),
            Tag::Json => Ok(Mono::Json),
            Tag::Null => Ok(Mono::Null),
            Tag::TypeVar => match params.as_slice() {
                [Param::Str(symbol)] => TypeVar::new(symbol.clone()).map(Mono::TypeVar),
                other => Err(mismatch(other)),
            },
            Tag::Ellipsis => match params.as_slice() {
                [] | [Param::Absent] => Ok(Mono::Ellipsis(None)),
                [Param::Type(Mono::TypeVar(tv))] => Ok(Mono::Ellipsis(Some(tv.clone()))),
                other => Err(mismatch(other)),
            },
            Tag::CType => match params.as_slice() {
                [Param::Str(name), Param::Int(size), Param::Int(align)] => {
                    let size = u32::try_from(*size).map_err(|_| mismatch(&params))?;
                    let align = u32::try_from(*align).map_err(|_| mismatch(&params))?;
                    Ok(Mono::CType(CType::new(name.clone(), size, align)))
                }
                other => Err(mismatch(other)),
            },
            Tag::String => {
                let (fixlen, encoding) = match params.as_slice() {
                    [] => (None, None),
                    [Param::Absent | Param::Int(_)] => (params.first(), None),
                    [Param::Str(enc)] => (None, Some(enc)),
                    [fixlen, Param::Str(enc)] => (Some(fixlen), Some(enc)),
                    other => return Err(mismatch(other)),
                };
                let fixlen = match fixlen {
                    None | Some(Param::Absent) => None,
                    Some(Param::Int(n)) => Some(fixed_length(*n)?),
                    Some(_) => return Err(mismatch(&params)),
                };
                StringType::with_options(&StringOptions {
                    fixlen,
                    encoding: encoding.map(|enc| &**enc),
                })
                .map(Mono::String)
            }
            Tag::Time | Tag::DateTime => {
                let tz = match params.as_slice() {
                    [] | [Param::Absent] => None,
                    [Param::Str(tz)] => Some(tz.clone()),
                    other => return Err(mismatch(other)),
                };
                Ok(if tag == Tag::Time {
                    Mono::Time(tz)
                } else {
                    Mono::DateTime(tz)
                })
            }
            Tag::Units => match params.as_slice() {
                [Param::Str(unit)] => Units::new(unit.clone(), None).map(Mono::Units),
                [Param::Str(unit), Param::Type(carrier)] => {
                    let carrier = DataShape::wrap(carrier.clone())?;
                    Units::new(unit.clone(), Some(carrier)).map(Mono::Units)
                }
                other => Err(mismatch(other)),
            },
            Tag::IntegerConstant => match params.as_slice() {
                [Param::Int(n)] => i64::try_from(*n)
                    .map(Mono::IntegerConstant)
                    .map_err(|_| mismatch(&params)),
                other => Err(mismatch(other)),
            },
            Tag::StringConstant => match params.as_slice() {
                [Param::Str(s)] => Ok(Mono::StringConstant(s.clone())),
                other => Err(mismatch(other)),
            },
            Tag::Option => match <[Param; 1]>::try_from(params) {
                Ok([inner]) => Mono::option(inner),
                Err(params) => Err(mismatch(&params)),
            },
            Tag::Record => match <[Param; 1]>::try_from(params) {
                Ok([Param::Fields(fields)]) => Record::from_fields(fields).map(Mono::Record),
                Ok(other) => Err(mismatch(&other)),
                Err(params) => Err(mismatch(&params)),
            },
            Tag::Tuple => Tuple::new(params).map(Mono::Tuple),
            Tag::Function => {
                let mut params = params;
                let ret = params.pop().ok_or_else(|| mismatch(&[]))?;
                Function::new(params, ret).map(Mono::Function)
            }
            Tag::DataShape => DataShape::new(params).map(Mono::DataShape),
            Tag::Implements => match <[Param; 2]>::try_from(params) {
                Ok([Param::Type(subject), Param::TypeSet(typeset)]) => {
                    Implements::new(subject, typeset).map(Mono::Implements)
                }
                Ok(other) => Err(mismatch(&other)),
                Err(params) => Err(mismatch(&params)),
            },
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use crate::builtin;
    use pretty_assertions::assert_eq;

    #[test]
    fn ints_become_fixed() {
        assert_eq!(launder(Param::Int(5)).unwrap(), Mono::Fixed(5));
        assert!(matches!(
            launder(Param::Int(-1)),
            Err(DataShapeError::Construction(_))
        ));
    }

    #[test]
    fn largest_fixed_rebuilds_exactly() {
        let fixed = Mono::Fixed(u64::MAX);
        let rebuilt = Mono::from_parameters(Tag::Fixed, fixed.parameters()).unwrap();
        assert_eq!(rebuilt, fixed);

        let string = Mono::String(StringType::fixed(u64::MAX));
        let rebuilt = Mono::from_parameters(Tag::String, string.parameters()).unwrap();
        assert_eq!(rebuilt, string);
    }

    #[test]
    fn integer_constants_stay_in_range() {
        let constant = Mono::IntegerConstant(i64::MIN);
        let rebuilt = Mono::from_parameters(Tag::IntegerConstant, constant.parameters()).unwrap();
        assert_eq!(rebuilt, constant);
        assert!(Mono::from_parameters(Tag::IntegerConstant, vec![Param::Int(i128::MAX)]).is_err());
    }

    #[test]
    fn names_are_looked_up() {
        assert_eq!(launder("int32".into()).unwrap(), builtin::int32());
        assert_eq!(launder("int".into()).unwrap(), builtin::int32());
        assert_eq!(
            launder("no_such_type".into()),
            Err(DataShapeError::UnknownType("no_such_type".into()))
        );
    }

    #[test]
    fn single_element_datashape_collapses() {
        let ds = DataShape::wrap(builtin::int32()).unwrap();
        assert_eq!(launder(ds.into()).unwrap(), builtin::int32());
    }

    #[test]
    fn laundering_is_idempotent() {
        let ds = DataShape::new(vec![Param::Int(5), "int32".into()]).unwrap();
        let once = launder(ds.clone().into()).unwrap();
        let twice = launder(once.clone().into()).unwrap();
        assert_eq!(once, Mono::DataShape(ds));
        assert_eq!(once, twice);
    }

    #[test]
    fn local_registry_resolves_names() {
        let registry = TypeRegistry::new();
        registry.register("cell", builtin::uint8()).unwrap();
        assert_eq!(
            launder_with(&registry, "cell".into()).unwrap(),
            builtin::uint8()
        );
        assert!(launder_with(&registry, "int32".into()).is_err());
    }

    #[test]
    fn option_sanitizes_strings() {
        let opt = Mono::option("float32").unwrap();
        assert_eq!(opt, Mono::Option(Arc::new(builtin::float32())));
    }

    #[test]
    fn string_from_parameter_forms() {
        let build = |params: Vec<Param>| Mono::from_parameters(Tag::String, params).unwrap();
        assert_eq!(build(vec![]), builtin::string());
        assert_eq!(build(vec![Param::Int(7)]), Mono::String(StringType::fixed(7)));
        assert_eq!(
            build(vec!["utf-16".into()]),
            Mono::String(StringType::encoded("U16").unwrap())
        );
        assert_eq!(
            build(vec![Param::Int(7), "utf8".into()]),
            Mono::String(StringType::fixed(7))
        );
    }

    #[test]
    fn wrong_parameters_are_construction_errors() {
        assert!(matches!(
            Mono::from_parameters(Tag::Fixed, vec!["5".into()]),
            Err(DataShapeError::Construction(_))
        ));
        assert!(matches!(
            Mono::from_parameters(Tag::Var, vec![Param::Int(1)]),
            Err(DataShapeError::Construction(_))
        ));
        assert!(matches!(
            Mono::from_parameters(Tag::Function, vec![]),
            Err(DataShapeError::Construction(_))
        ));
    }
}
