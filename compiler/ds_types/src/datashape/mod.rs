//! The `DataShape` composite and its shape algebra.

mod index;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::registry::{self, TypeRegistry};
use crate::{launder, DataShapeError, Field, Mono, Param, Record, Result, TypeVar};

pub use index::{Index, Slice};

/// Dimensions followed by exactly one measure, `5 * var * int32`.
///
/// A datashape always holds at least one element. The last element is the
/// measure and never a dimension; every other element is a dimension or a
/// type variable. A trailing datashape is spliced in, so datashapes never
/// nest.
///
/// The optional name is not part of the identity: a named datashape is
/// equal to an unnamed one with the same elements.
#[derive(Clone)]
pub struct DataShape {
    params: Arc<[Mono]>,
    name: Option<Arc<str>>,
}

impl DataShape {
    /// Build a datashape from raw parameters, laundering each one.
    pub fn new(params: Vec<Param>) -> Result<Self> {
        if let [Param::Str(text)] = params.as_slice() {
            return Err(DataShapeError::Construction(format!(
                "the DataShape constructor does not parse text; use `ds_parse::dshape(\"{text}\")`"
            )));
        }
        let elements = params
            .into_iter()
            .map(launder)
            .collect::<Result<Vec<_>>>()?;
        Self::from_elements(elements)
    }

    /// Build and bind a named datashape in the global registry.
    pub fn named(name: &str, params: Vec<Param>) -> Result<Self> {
        Self::named_in(registry::global(), name, params)
    }

    /// Build and bind a named datashape in `registry`.
    pub fn named_in(registry: &TypeRegistry, name: &str, params: Vec<Param>) -> Result<Self> {
        let mut ds = Self::new(params)?;
        ds.name = Some(name.into());
        registry.register(name, Mono::DataShape(ds.clone()))?;
        Ok(ds)
    }

    /// View any node as a datashape; a measure becomes a datashape with no
    /// dimensions.
    pub fn wrap(ty: Mono) -> Result<Self> {
        match ty {
            Mono::DataShape(ds) => Ok(ds),
            other => Self::from_elements(vec![other]),
        }
    }

    pub(crate) fn from_elements(mut elements: Vec<Mono>) -> Result<Self> {
        if let Some(Mono::DataShape(_)) = elements.last() {
            if let Some(Mono::DataShape(tail)) = elements.pop() {
                elements.extend(tail.params.iter().cloned());
            }
        }
        let Some((measure, dims)) = elements.split_last() else {
            return Err(DataShapeError::Construction(
                "a datashape needs at least one parameter".into(),
            ));
        };
        if measure.tag().is_dimension() {
            return Err(DataShapeError::Construction(format!(
                "only a measure can appear on the last position of a datashape, not `{measure}`"
            )));
        }
        if let Some((position, dim)) = dims
            .iter()
            .enumerate()
            .find(|(_, dim)| dim.tag().is_measure())
        {
            return Err(DataShapeError::Construction(format!(
                "only dimensions can appear before the last position of a datashape, not `{dim}` at position {position}"
            )));
        }
        Ok(DataShape {
            params: elements.into(),
            name: None,
        })
    }

    /// This datashape with `dim` added as the outermost dimension.
    pub fn prepend(&self, dim: Mono) -> Result<Self> {
        let mut elements = Vec::with_capacity(self.params.len() + 1);
        elements.push(dim);
        elements.extend(self.params.iter().cloned());
        Self::from_elements(elements)
    }

    /// Number of elements, dimensions plus the measure.
    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.params.len() - 1
    }

    pub fn shape(&self) -> &[Mono] {
        &self.params[..self.ndim()]
    }

    pub fn measure(&self) -> &Mono {
        &self.params[self.ndim()]
    }

    /// All elements in order.
    pub fn params(&self) -> &[Mono] {
        &self.params
    }

    pub fn get(&self, position: usize) -> Option<&Mono> {
        self.params.get(position)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The datashape with `leading` dimensions removed.
    ///
    /// ```text
    /// (1 * 2 * 3 * int32).subarray(1) == 2 * 3 * int32
    /// ```
    pub fn subarray(&self, leading: usize) -> Result<Self> {
        if leading > self.ndim() {
            return Err(DataShapeError::Index(format!(
                "Not enough dimensions in data shape to remove {leading} leading dimensions."
            )));
        }
        Ok(DataShape {
            params: self.params[leading..].into(),
            name: None,
        })
    }

    /// Every dimension replaced by a positional type variable.
    pub fn sigform(&self) -> Self {
        let params = self
            .shape()
            .iter()
            .enumerate()
            .map(|(i, _)| Mono::TypeVar(TypeVar::positional(i)))
            .chain(std::iter::once(self.measure().clone()))
            .collect();
        DataShape { params, name: None }
    }

    /// Datashape of the value selected by `index`.
    ///
    /// Integers, lists and slices index the outermost dimension. When there
    /// are no dimensions and the measure is a record, they select fields
    /// instead; names select fields too. A tuple applies one index per
    /// axis, left to right.
    #[tracing::instrument(level = "trace", skip_all, fields(datashape = %self, index = %index))]
    pub fn subshape(&self, index: &Index) -> Result<Self> {
        let lead = self.shape().first();
        let record = match (lead, self.measure()) {
            (None, Mono::Record(rec)) => Some(rec),
            _ => None,
        };
        match (index, lead, record) {
            (Index::Int(_), Some(_), _) => self.subarray(1),
            (Index::Field(name), _, Some(rec)) => {
                let ty = rec
                    .get(name)
                    .ok_or_else(|| DataShapeError::UnknownField(name.to_string()))?;
                Self::wrap(ty.clone())
            }
            (Index::Int(i), _, Some(rec)) => Self::wrap(rec.field_at(*i)?.ty.clone()),
            (Index::List(items), _, Some(rec)) => {
                let fields = items
                    .iter()
                    .map(|item| match item {
                        Index::Int(i) => rec.field_at(*i).cloned(),
                        Index::Field(name) => rec
                            .field(name)
                            .cloned()
                            .ok_or_else(|| DataShapeError::UnknownField(name.to_string())),
                        _ => Err(self.not_implemented(index)),
                    })
                    .collect::<Result<Vec<Field>>>()?;
                Self::wrap(Mono::Record(Record::from_fields(fields)?))
            }
            (Index::Slice(slice), _, Some(rec)) => {
                let len = u64::try_from(rec.len()).unwrap_or(u64::MAX);
                let fields = slice
                    .resolve(len)?
                    .positions()
                    .filter_map(|i| rec.fields().get(i).cloned())
                    .collect::<Vec<_>>();
                Self::wrap(Mono::Record(Record::from_fields(fields)?))
            }
            (Index::List(items), Some(_), _) => {
                let count = u64::try_from(items.len()).unwrap_or(u64::MAX);
                self.subarray(1)?.prepend(Mono::Fixed(count))
            }
            (Index::Slice(slice), Some(dim), _) => {
                let rest = self.subarray(1)?;
                match dim {
                    Mono::Fixed(n) => rest.prepend(Mono::Fixed(slice.extent(Some(*n))?)),
                    _ if slice.stop.is_some() => rest.prepend(Mono::Fixed(slice.extent(None)?)),
                    _ => rest.prepend(Mono::Var),
                }
            }
            (Index::Tuple(items), _, _) => match items.as_slice() {
                [] => Ok(self.clone()),
                [only] => self.subshape(only),
                [first, rest @ ..] => {
                    let rest = Index::Tuple(rest.to_vec());
                    match lead {
                        None => self.subshape(first)?.subshape(&rest),
                        Some(dim) => self
                            .subarray(1)?
                            .subshape(&rest)?
                            .prepend(dim.clone())?
                            .subshape(first),
                    }
                }
            },
            _ => Err(self.not_implemented(index)),
        }
    }

    fn not_implemented(&self, index: &Index) -> DataShapeError {
        DataShapeError::NotImplemented {
            datashape: self.to_string(),
            index: index.to_string(),
        }
    }
}

impl PartialEq for DataShape {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl Eq for DataShape {}

impl Hash for DataShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.params.hash(state);
    }
}

impl fmt::Display for DataShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            return f.write_str(name);
        }
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(" * ")?;
            }
            write!(f, "{param}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for DataShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dshape({:?})", self.to_string())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
