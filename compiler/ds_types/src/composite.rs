//! Record, tuple and function types.

use std::fmt;
use std::sync::Arc;

use crate::mono::write_field_name;
use crate::{launder, DataShape, DataShapeError, Mono, Param, Result};

/// A named record field.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Field {
    pub name: Arc<str>,
    pub ty: Mono,
}

impl Field {
    pub fn new(name: impl Into<Arc<str>>, ty: Mono) -> Self {
        Field {
            name: name.into(),
            ty,
        }
    }
}

/// Ordered fields mapped to types.
///
/// Field order is part of the type: `{ x : int32, y : int32 }` and
/// `{ y : int32, x : int32 }` are different records.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Record(Arc<[Field]>);

impl Record {
    /// Build a record, laundering each field type.
    pub fn new<N>(fields: impl IntoIterator<Item = (N, Param)>) -> Result<Self>
    where
        N: Into<Arc<str>>,
    {
        let fields = fields
            .into_iter()
            .map(|(name, ty)| Ok(Field::new(name, field_type(launder(ty)?)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Record(fields.into()))
    }

    /// Build a record from already constructed fields.
    pub fn from_fields(fields: impl IntoIterator<Item = Field>) -> Result<Self> {
        let fields = fields
            .into_iter()
            .map(|field| {
                let ty = field_type(launder(Param::Type(field.ty))?)?;
                Ok(Field::new(field.name, ty))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Record(fields.into()))
    }

    pub fn fields(&self) -> &[Field] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|f| &*f.name)
    }

    pub fn types(&self) -> impl Iterator<Item = &Mono> + '_ {
        self.0.iter().map(|f| &f.ty)
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.iter().find(|f| &*f.name == name)
    }

    /// Type of the field named `name`.
    pub fn get(&self, name: &str) -> Option<&Mono> {
        self.field(name).map(|f| &f.ty)
    }

    /// Field at `position`; negative positions count from the end.
    pub fn field_at(&self, position: i64) -> Result<&Field> {
        let len = self.0.len();
        let resolved = if position < 0 {
            usize::try_from(position.unsigned_abs())
                .ok()
                .and_then(|back| len.checked_sub(back))
        } else {
            usize::try_from(position).ok().filter(|&i| i < len)
        };
        resolved.map(|i| &self.0[i]).ok_or_else(|| {
            DataShapeError::Index(format!(
                "field index {position} out of range for a record with {len} fields"
            ))
        })
    }
}

/// Record fields hold measures or full datashapes, never bare dimensions.
fn field_type(ty: Mono) -> Result<Mono> {
    if ty.tag().is_dimension() {
        return Err(DataShapeError::Construction(format!(
            "a record field cannot have the dimension `{ty}` as its type"
        )));
    }
    Ok(ty)
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_field_name(f, &field.name)?;
            write!(f, " : {}", field.ty)?;
        }
        f.write_str(" }")
    }
}

/// Product of unnamed fields; every element is a full datashape.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Tuple(Arc<[DataShape]>);

impl Tuple {
    pub fn new(elements: impl IntoIterator<Item = Param>) -> Result<Self> {
        let elements = elements
            .into_iter()
            .map(|p| DataShape::wrap(launder(p)?))
            .collect::<Result<Vec<_>>>()?;
        Ok(Tuple(elements.into()))
    }

    pub fn elements(&self) -> &[DataShape] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_list(f, self.0.iter())?;
        f.write_str(")")
    }
}

/// Function signature; the last parameter is the return type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Function(Arc<[Mono]>);

impl Function {
    pub fn new(args: impl IntoIterator<Item = Param>, ret: Param) -> Result<Self> {
        let params = args
            .into_iter()
            .chain(std::iter::once(ret))
            .map(launder)
            .collect::<Result<Vec<_>>>()?;
        Ok(Function(params.into()))
    }

    /// All parameters: argument types followed by the return type.
    pub fn params(&self) -> &[Mono] {
        &self.0
    }

    pub fn argtypes(&self) -> &[Mono] {
        &self.0[..self.0.len() - 1]
    }

    pub fn restype(&self) -> &Mono {
        &self.0[self.0.len() - 1]
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_list(f, self.argtypes().iter())?;
        write!(f, ") -> {}", self.restype())
    }
}

fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
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

    fn point(first: &str, second: &str) -> Record {
        Record::new([(first, Param::from("int32")), (second, Param::from("int32"))]).unwrap()
    }

    #[test]
    fn respects_order() {
        assert_ne!(point("x", "y"), point("y", "x"));
        assert_eq!(point("x", "y"), point("x", "y"));
    }

    #[test]
    fn names_are_laundered() {
        let by_name = Record::new([("x", Param::from("real"))]).unwrap();
        let by_type = Record::new([("x", Param::from(builtin::float64()))]).unwrap();
        assert_eq!(by_name, by_type);
    }

    #[test]
    fn views() {
        let rec = point("x", "y");
        assert_eq!(rec.names().collect::<Vec<_>>(), ["x", "y"]);
        assert_eq!(rec.get("y"), Some(&builtin::int32()));
        assert_eq!(rec.get("z"), None);
        assert_eq!(&*rec.field_at(-1).unwrap().name, "y");
        assert!(matches!(rec.field_at(2), Err(DataShapeError::Index(_))));
        assert!(matches!(rec.field_at(-3), Err(DataShapeError::Index(_))));
    }

    #[test]
    fn dimension_field_is_rejected() {
        assert!(matches!(
            Record::new([("n", Param::Int(3))]),
            Err(DataShapeError::Construction(_))
        ));
    }

    #[test]
    fn rendering_quotes_awkward_names() {
        let rec = Record::new([
            ("amount", Param::from("int32")),
            ("Unique Key", Param::from("int64")),
            ("it's", Param::from("string")),
            ("snake_case", Param::from("bool")),
        ])
        .unwrap();
        assert_eq!(
            rec.to_string(),
            r"{ amount : int32, 'Unique Key' : int64, 'it\'s' : string, 'snake_case' : bool }"
        );
    }

    #[test]
    fn tuple_elements_become_datashapes() {
        let tuple = Tuple::new([Param::from("int32"), Param::from(builtin::string())]).unwrap();
        assert_eq!(tuple.len(), 2);
        assert_eq!(tuple.elements()[0].measure(), &builtin::int32());
        assert_eq!(tuple.to_string(), "(int32, string)");
    }

    #[test]
    fn function_views() {
        let func = Function::new([Param::from("int32"), Param::from("float64")], "bool".into())
            .unwrap();
        assert_eq!(func.argtypes(), &[builtin::int32(), builtin::float64()]);
        assert_eq!(func.restype(), &builtin::bool_());
        assert_eq!(func.to_string(), "(int32, float64) -> bool");
    }
}
