use super::{Builder, Table, TypeDescriptor, TypeId};

use indexmap::IndexMap;

/// Arena of every declared type, indexed by [`TypeId`].
///
/// Parent chains are guaranteed to terminate once the hierarchy has been
/// built, so walking ancestors never loops.
#[derive(Debug, Default, Clone)]
pub struct Hierarchy {
    pub(super) types: Vec<TypeDescriptor>,
    pub(super) by_name: IndexMap<String, TypeId>,
}

/// Iterator over the strict ancestors of a type, nearest first.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    hierarchy: &'a Hierarchy,
    next: Option<TypeId>,
}

impl Hierarchy {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Get a type by ID
    #[track_caller]
    pub fn get(&self, id: TypeId) -> &TypeDescriptor {
        self.types.get(id.0).expect("invalid type ID")
    }

    /// Resolve a type name to its ID
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&TypeDescriptor> {
        self.lookup(name).map(|id| self.get(id))
    }

    pub fn types(&self) -> impl ExactSizeIterator<Item = &TypeDescriptor> + '_ {
        self.types.iter()
    }

    pub fn ids(&self) -> impl ExactSizeIterator<Item = TypeId> {
        (0..self.types.len()).map(TypeId)
    }

    pub fn parent(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.get(id).parent.map(|parent| self.get(parent))
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: TypeId) -> Ancestors<'_> {
        Ancestors {
            hierarchy: self,
            next: self.get(id).parent,
        }
    }

    /// Returns `true` if `sub` extends `sup`, directly or transitively.
    /// A type is not a subtype of itself.
    pub fn is_subtype(&self, sub: TypeId, sup: TypeId) -> bool {
        self.ancestors(sub).any(|ancestor| ancestor.id == sup)
    }

    /// Returns `true` if `ty` is `sup` or one of its subtypes.
    pub fn is_a(&self, ty: TypeId, sup: TypeId) -> bool {
        ty == sup || self.is_subtype(ty, sup)
    }

    /// The topmost ancestor of `id`, or `id` itself when it has no parent.
    pub fn root_of(&self, id: TypeId) -> TypeId {
        self.ancestors(id).last().map(|root| root.id).unwrap_or(id)
    }

    pub fn table(&self, id: TypeId) -> &Table {
        &self.get(id).table
    }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TypeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let ty = self.hierarchy.get(self.next?);
        self.next = ty.parent;
        Some(ty)
    }
}
