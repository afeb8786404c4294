//! Type system for datashapes.
//!
//! A datashape is a run of dimensions (`5`, `var`, `N`, `...`) followed by a
//! single measure (`int32`, `string[10]`, `{ x : float64 }`, ...), written
//! `5 * var * { x : float64 }`.
//!
//! # Representation
//!
//! - [`Mono`] is the closed set of type nodes. All nodes are immutable and
//!   compare structurally; composite nodes share their children through
//!   `Arc`, so cloning is cheap.
//! - [`DataShape`] is the composite of dimensions and a trailing measure.
//!   It owns the shape algebra: `subarray`, `subshape` and `sigform`.
//! - [`TypeRegistry`] maps names to canonical instances. The process-wide
//!   instance returned by [`registry::global`] is seeded with the built-in
//!   scalar and temporal types.
//! - [`layout`] converts between datashapes and fixed-layout native array
//!   descriptors.
//!
//! Every node can be rebuilt from its parts:
//!
//! ```text
//! Mono::from_parameters(ty.tag(), ty.parameters()) == ty
//! ```

mod composite;
mod datashape;
mod error;
mod launder;
mod mono;
mod scalar;
mod string;
mod tag;
mod var;

pub mod layout;
pub mod registry;

pub use composite::{Field, Function, Record, Tuple};
pub use datashape::{DataShape, Index, Slice};
pub use error::{DataShapeError, Result};
pub use launder::{launder, launder_with, Param};
pub use layout::{from_native_layout, to_native_element, to_native_layout, NativeLayout};
pub use mono::Mono;
pub use registry::TypeRegistry;
pub use scalar::{builtin, CType};
pub use string::{Encoding, StringOptions, StringType};
pub use tag::{Kind, Tag};
pub use var::{Implements, TypeSet, TypeVar, Units};
