//! Index expressions accepted by [`DataShape::subshape`](crate::DataShape::subshape).

use std::fmt;
use std::sync::Arc;

use crate::{DataShapeError, Result};

/// One subscript, or a tuple of per-axis subscripts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Index {
    /// Position along an axis, or field position in a record.
    Int(i64),
    /// Record field by name.
    Field(Arc<str>),
    /// Several positions (or field names) at once.
    List(Vec<Index>),
    Slice(Slice),
    /// Per-axis indices, consumed left to right.
    Tuple(Vec<Index>),
}

impl Index {
    pub fn field(name: impl Into<Arc<str>>) -> Self {
        Index::Field(name.into())
    }
}

impl From<i64> for Index {
    fn from(i: i64) -> Self {
        Index::Int(i)
    }
}

impl From<&str> for Index {
    fn from(name: &str) -> Self {
        Index::Field(name.into())
    }
}

impl From<Slice> for Index {
    fn from(slice: Slice) -> Self {
        Index::Slice(slice)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Int(i) => write!(f, "{i}"),
            Index::Field(name) => write!(f, "'{name}'"),
            Index::List(items) => {
                f.write_str("[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            Index::Slice(slice) => write!(f, "{slice}"),
            Index::Tuple(items) => write_joined(f, items),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Index]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// `start:stop:step`, each part optional.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub step: Option<i64>,
}

/// A slice resolved against a known length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Resolved {
    start: i128,
    step: i128,
    count: u64,
}

impl Slice {
    /// The full slice `:`.
    pub const fn full() -> Self {
        Slice {
            start: None,
            stop: None,
            step: None,
        }
    }

    pub const fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        Slice { start, stop, step }
    }

    pub(crate) fn step(&self) -> Result<i64> {
        match self.step {
            Some(0) => Err(DataShapeError::Index("slice step cannot be zero".into())),
            Some(step) => Ok(step),
            None => Ok(1),
        }
    }

    /// Length of the dimension this slice selects from one of `len` items.
    ///
    /// Bounds are taken as written: `stop - start` (a missing start is 0, a
    /// missing stop is `len`), divided by the step and rounded up. Negative
    /// counts select nothing. Without a known `len` the stop is required.
    pub(crate) fn extent(&self, len: Option<u64>) -> Result<u64> {
        let step = i128::from(self.step()?);
        let start = i128::from(self.start.unwrap_or(0));
        let stop = match (self.stop, len) {
            (Some(stop), _) => i128::from(stop),
            (None, Some(len)) => i128::from(len),
            (None, None) => {
                return Err(DataShapeError::Index(format!(
                    "slice `{self}` needs a stop on a dimension of unknown length"
                )));
            }
        };
        let count = if self.step.is_some() {
            div_ceil(stop - start, step)
        } else {
            stop - start
        };
        Ok(u64::try_from(count.max(0)).unwrap_or(u64::MAX))
    }

    /// Clamp the bounds to `len` items; negative bounds count from the end.
    pub(crate) fn resolve(&self, len: u64) -> Result<Resolved> {
        let step = i128::from(self.step()?);
        let len = i128::from(len);
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: i64| {
            let bound = i128::from(bound);
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self.stop.map_or(if step < 0 { lower } else { upper }, clamp);
        let count = if step > 0 && start < stop {
            (stop - start - 1) / step + 1
        } else if step < 0 && stop < start {
            (start - stop - 1) / -step + 1
        } else {
            0
        };
        Ok(Resolved {
            start,
            step,
            count: u64::try_from(count).unwrap_or(u64::MAX),
        })
    }
}

fn div_ceil(n: i128, d: i128) -> i128 {
    let q = n / d;
    if n % d != 0 && (n < 0) == (d < 0) {
        q + 1
    } else {
        q
    }
}

impl Resolved {
    /// Selected positions, in order.
    pub(crate) fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.count).filter_map(move |i| usize::try_from(self.start + i128::from(i) * self.step).ok())
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        f.write_str(":")?;
        if let Some(stop) = self.stop {
            write!(f, "{stop}")?;
        }
        if let Some(step) = self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}
