use super::Table;
use crate::stmt::{Discriminator, Value};

use std::fmt;

/// Transform applied to a type's discriminator when it is stamped onto an
/// instance, e.g. to adjust casing.
pub type DiscriminatorTransform = fn(&Discriminator) -> Value;

/// Static facts about one type of the hierarchy, with every name resolved
/// to an id.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Uniquely identifies the type within the hierarchy
    pub id: TypeId,

    /// Name of the type. Doubles as the discriminator tag of concrete types
    /// that declare none.
    pub name: String,

    /// Direct supertype
    pub parent: Option<TypeId>,

    pub kind: TypeKind,

    /// Value stored in the discriminator column for instances of exactly
    /// this type.
    pub discriminator: Option<Discriminator>,

    /// Columns this type itself declares as persisted.
    pub persisted: Vec<String>,

    /// Direct subclasses, in declaration order.
    pub subclasses: Vec<TypeId>,

    /// Reject attributes outside the persisted set instead of dropping them.
    pub strict: bool,

    pub discriminator_transform: Option<DiscriminatorTransform>,

    /// Table configuration, resolved from the nearest declaring ancestor.
    pub table: Table,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Can be instantiated and persisted.
    #[default]
    Concrete,

    /// Only exists to group its subclasses.
    Abstract,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub usize);

impl TypeDescriptor {
    pub fn is_concrete(&self) -> bool {
        self.kind == TypeKind::Concrete
    }

    pub fn is_abstract(&self) -> bool {
        self.kind == TypeKind::Abstract
    }

    /// The tag this type answers to when it declares none: its own name,
    /// provided it can be instantiated.
    pub fn identity(&self) -> Option<Discriminator> {
        self.is_concrete()
            .then(|| Discriminator::String(self.name.clone()))
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TypeId({})", self.0)
    }
}
