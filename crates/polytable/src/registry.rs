mod builder;
pub use builder::Builder;

mod cache;
pub(crate) use cache::KeyedCache;

use crate::{Model, PersistedSet, TypeMap};

use polytable_core::{
    schema::{Hierarchy, TypeDescriptor, TypeId},
    Result,
};

use std::sync::Arc;

/// Owns a hierarchy and the caches derived from it.
///
/// Type maps and persisted sets are pure functions of the declarations.
/// Each is computed the first time it is asked for and memoised for the
/// lifetime of the registry; concurrent first requests for the same type
/// wait on that type's slot only.
pub struct Registry {
    hierarchy: Hierarchy,

    /// Type map per root type. Failed builds are memoised too.
    pub(crate) type_maps: KeyedCache<Result<Arc<TypeMap>>>,

    /// Declared persisted columns per type, ancestors included.
    pub(crate) persisted: KeyedCache<Arc<PersistedSet>>,

    /// Declared persisted columns plus the table's structural columns.
    pub(crate) allowed: KeyedCache<Arc<PersistedSet>>,

    /// Resolve discriminator collisions first-write-wins instead of failing.
    pub(crate) legacy_precedence: bool,
}

impl Registry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(hierarchy: Hierarchy, legacy_precedence: bool) -> Registry {
        let len = hierarchy.len();
        Registry {
            hierarchy,
            type_maps: KeyedCache::new(len),
            persisted: KeyedCache::new(len),
            allowed: KeyedCache::new(len),
            legacy_precedence,
        }
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Get a type by ID
    #[track_caller]
    pub fn descriptor(&self, id: TypeId) -> &TypeDescriptor {
        self.hierarchy.get(id)
    }

    /// Resolve a type name to its ID
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.hierarchy.lookup(name)
    }

    /// Resolve a compile-time model to its ID
    pub fn type_id<M: Model>(&self) -> Option<TypeId> {
        self.lookup(M::NAME)
    }

    /// Returns `true` if `sub` extends `sup`, directly or transitively.
    pub fn is_subtype(&self, sub: TypeId, sup: TypeId) -> bool {
        self.hierarchy.is_subtype(sub, sup)
    }

    /// Computes every cache entry, surfacing the first hierarchy violation.
    ///
    /// Misdeclared subclasses are otherwise only discovered the first time a
    /// type map that reaches them is requested.
    pub fn boot(&self) -> Result<()> {
        for id in self.hierarchy.ids() {
            self.type_map(id)?;
            self.allowed_columns(id);
        }

        tracing::debug!(types = self.hierarchy.len(), "registry booted");
        Ok(())
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.hierarchy.len())
            .field("type_maps", &self.type_maps.populated())
            .field("persisted", &self.persisted.populated())
            .field("legacy_precedence", &self.legacy_precedence)
            .finish()
    }
}
