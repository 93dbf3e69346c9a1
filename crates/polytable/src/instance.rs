use polytable_core::{
    schema::{Hierarchy, TypeId},
    stmt::{Row, Value},
};

/// A record of a concrete type in the hierarchy.
///
/// Attributes are held in their storage representation. The instance
/// remembers the attributes it was loaded with so changes can be detected.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    ty: TypeId,
    attributes: Row,
    original: Row,
    exists: bool,
}

impl Instance {
    /// A new instance that has not been persisted yet.
    pub fn new(ty: TypeId) -> Instance {
        Instance::with_attributes(ty, Row::new())
    }

    pub fn with_attributes(ty: TypeId, attributes: Row) -> Instance {
        Instance {
            ty,
            attributes,
            original: Row::new(),
            exists: false,
        }
    }

    /// An instance loaded from storage: not new and not dirty.
    pub(crate) fn from_storage(ty: TypeId, attributes: Row) -> Instance {
        Instance {
            ty,
            original: attributes.clone(),
            attributes,
            exists: true,
        }
    }

    pub fn ty(&self) -> TypeId {
        self.ty
    }

    /// Returns `true` if the instance is of type `ty` or one of its
    /// subtypes.
    pub fn is_a(&self, hierarchy: &Hierarchy, ty: TypeId) -> bool {
        hierarchy.is_a(self.ty, ty)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.attributes.get(column)
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(column, value)
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.attributes.remove(column)
    }

    pub fn attributes(&self) -> &Row {
        &self.attributes
    }

    pub fn into_attributes(self) -> Row {
        self.attributes
    }

    /// Attributes as last loaded or persisted.
    pub fn original(&self) -> &Row {
        &self.original
    }

    /// Returns `true` if the instance was loaded from, or has been written
    /// to, storage.
    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty().next().is_some()
    }

    /// Columns that were added, changed or removed since the instance was
    /// loaded or last persisted.
    pub fn dirty(&self) -> impl Iterator<Item = &str> + '_ {
        let changed = self
            .attributes
            .iter()
            .filter(|(column, value)| self.original.get(column) != Some(*value))
            .map(|(column, _)| column);

        let removed = self
            .original
            .columns()
            .filter(|column| !self.attributes.contains(column));

        changed.chain(removed)
    }

    /// Records that the storage collaborator persisted the current
    /// attributes.
    pub fn mark_persisted(&mut self) {
        self.original = self.attributes.clone();
        self.exists = true;
    }
}
