//! Name → type registry.
//!
//! Parsing and laundering resolve names like `int32` or `real` through a
//! registry. Each name maps to one canonical node; binding a name twice
//! is an error, so a name never changes meaning once bound.
//!
//! [`global`] is the process-wide registry, seeded with the built-in types
//! on first use. Callers that need isolation (tests, embedders with their
//! own vocabularies) build a [`TypeRegistry`] of their own.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{scalar, DataShapeError, Mono, Result};

/// Concurrent map from names to canonical type nodes.
pub struct TypeRegistry {
    types: RwLock<FxHashMap<Arc<str>, Mono>>,
}

impl TypeRegistry {
    /// Empty registry, without even the built-ins.
    pub fn new() -> Self {
        Self {
            types: RwLock::new(FxHashMap::default()),
        }
    }

    /// Registry holding the built-in scalar and temporal types.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        scalar::seed(&mut registry);
        tracing::debug!(count = registry.len(), "seeded built-in types");
        registry
    }

    /// Bind `name` to `ty`.
    ///
    /// The check and the insert happen under one write lock, so two
    /// concurrent registrations of the same name cannot both succeed.
    pub fn register(&self, name: &str, ty: Mono) -> Result<()> {
        let mut types = self.types.write();
        if types.contains_key(name) {
            return Err(DataShapeError::DuplicateName(name.to_owned()));
        }
        tracing::debug!(name, %ty, "registered type");
        types.insert(name.into(), ty);
        Ok(())
    }

    /// Canonical node bound to `name`.
    pub fn lookup(&self, name: &str) -> Result<Mono> {
        self.get(name)
            .ok_or_else(|| DataShapeError::UnknownType(name.to_owned()))
    }

    pub fn get(&self, name: &str) -> Option<Mono> {
        self.types.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.read().contains_key(name)
    }

    /// All bound names, sorted.
    pub fn names(&self) -> Vec<Arc<str>> {
        let mut names: Vec<_> = self.types.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }

    /// Seeding path: exclusive access, no duplicate check.
    pub(crate) fn insert_builtin(&mut self, name: &str, ty: Mono) {
        self.types.get_mut().insert(name.into(), ty);
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("len", &self.len())
            .finish()
    }
}

static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();

/// The process-wide registry.
pub fn global() -> &'static TypeRegistry {
    GLOBAL.get_or_init(TypeRegistry::with_builtins)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
