//! Type variables, typeset constraints and unit-carrying measures.

use std::fmt;
use std::sync::Arc;

use crate::mono::write_quoted;
use crate::{builtin, DataShape, DataShapeError, Mono, Result};

/// A free variable in a signature, e.g. the `N` in `N * int32`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeVar(Arc<str>);

impl TypeVar {
    /// Create a type variable; the symbol must begin with a capital.
    pub fn new(symbol: impl Into<Arc<str>>) -> Result<Self> {
        let symbol = symbol.into();
        if !symbol.chars().next().is_some_and(char::is_uppercase) {
            return Err(DataShapeError::Construction(format!(
                "TypeVar symbol '{symbol}' does not begin with a capital"
            )));
        }
        Ok(TypeVar(symbol))
    }

    /// Type variable for position `n` of a signature form (`I0`, `I1`, ...).
    pub(crate) fn positional(n: usize) -> Self {
        TypeVar(format!("I{n}").into())
    }

    pub fn symbol(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named set of types a type variable may be constrained to.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeSet {
    name: Arc<str>,
    types: Arc<[Mono]>,
}

impl TypeSet {
    pub fn new(name: impl Into<Arc<str>>, types: impl IntoIterator<Item = Mono>) -> Self {
        TypeSet {
            name: name.into(),
            types: types.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn types(&self) -> &[Mono] {
        &self.types
    }

    /// Check if `ty` is a member of this set.
    pub fn contains(&self, ty: &Mono) -> bool {
        self.types.contains(ty)
    }
}

/// Constraint that a type variable belongs to a typeset, `T : numeric`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Implements {
    typevar: TypeVar,
    typeset: TypeSet,
}

impl Implements {
    /// Constrain `subject`, which must be a type variable.
    pub fn new(subject: Mono, typeset: TypeSet) -> Result<Self> {
        match subject {
            Mono::TypeVar(typevar) => Ok(Implements { typevar, typeset }),
            other => Err(DataShapeError::Construction(format!(
                "the subject of a typeset constraint must be a type variable, not `{other}`"
            ))),
        }
    }

    pub fn typevar(&self) -> &TypeVar {
        &self.typevar
    }

    pub fn typeset(&self) -> &TypeSet {
        &self.typeset
    }
}

impl fmt::Display for Implements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.typevar, self.typeset.name)
    }
}

/// Measure for values with a physical unit, `units['m', int32]`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Units {
    unit: Arc<str>,
    carrier: DataShape,
}

impl Units {
    /// Unit-carrying measure; the carrier defaults to `float64`.
    pub fn new(unit: impl Into<Arc<str>>, carrier: Option<DataShape>) -> Result<Self> {
        let carrier = match carrier {
            Some(ds) => ds,
            None => DataShape::wrap(builtin::float64())?,
        };
        Ok(Units {
            unit: unit.into(),
            carrier,
        })
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The datashape holding the numeric values.
    pub fn carrier(&self) -> &DataShape {
        &self.carrier
    }

    fn has_default_carrier(&self) -> bool {
        self.carrier.ndim() == 0 && *self.carrier.measure() == builtin::float64()
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("units[")?;
        write_quoted(f, &self.unit)?;
        if !self.has_default_carrier() {
            write!(f, ", {}", self.carrier)?;
        }
        f.write_str("]")
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

    #[test]
    fn typevar_needs_capital() {
        assert!(TypeVar::new("T").is_ok());
        assert!(TypeVar::new("Dim").is_ok());
        assert!(matches!(
            TypeVar::new("t"),
            Err(DataShapeError::Construction(_))
        ));
        assert!(TypeVar::new("").is_err());
    }

    #[test]
    fn implements_needs_typevar_subject() {
        let numeric = TypeSet::new("numeric", [builtin::int32(), builtin::float64()]);
        assert!(numeric.contains(&builtin::int32()));
        assert!(!numeric.contains(&builtin::string()));

        let constraint =
            Implements::new(Mono::TypeVar(TypeVar::new("T").unwrap()), numeric.clone()).unwrap();
        assert_eq!(constraint.to_string(), "T : numeric");
        assert!(Implements::new(builtin::int32(), numeric).is_err());
    }

    #[test]
    fn units_render_carrier_only_when_not_default() {
        let metres = Units::new("m", None).unwrap();
        assert_eq!(metres.to_string(), "units['m']");

        let counts = Units::new("m", Some(DataShape::wrap(builtin::int32()).unwrap())).unwrap();
        assert_eq!(counts.to_string(), "units['m', int32]");
    }
}
