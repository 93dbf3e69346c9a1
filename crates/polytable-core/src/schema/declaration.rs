use super::{DiscriminatorTransform, Table, TypeKind};
use crate::stmt::Discriminator;

/// How a developer describes one type of the hierarchy.
///
/// Types refer to each other by name; the names are resolved when the
/// hierarchy is built.
///
/// ```
/// use polytable_core::schema::{Declaration, Table};
///
/// let vehicle = Declaration::new("Vehicle")
///     .table(Table::new("vehicles"))
///     .persisted(["color", "owner_id"])
///     .subclasses(["MotorVehicle", "Bike"]);
///
/// let car = Declaration::new("Car")
///     .parent("MotorVehicle")
///     .discriminator("car")
///     .persisted(["capacity"]);
/// # let _ = (vehicle, car);
/// ```
#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: String,
    pub parent: Option<String>,
    pub kind: TypeKind,
    pub discriminator: Option<Discriminator>,
    pub persisted: Vec<String>,
    pub subclasses: Vec<String>,
    pub strict: bool,
    pub discriminator_transform: Option<DiscriminatorTransform>,
    pub table: Option<Table>,
}

impl Declaration {
    pub fn new(name: impl Into<String>) -> Declaration {
        Declaration {
            name: name.into(),
            parent: None,
            kind: TypeKind::Concrete,
            discriminator: None,
            persisted: vec![],
            subclasses: vec![],
            strict: false,
            discriminator_transform: None,
            table: None,
        }
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn discriminator(mut self, discriminator: impl Into<Discriminator>) -> Self {
        self.discriminator = Some(discriminator.into());
        self
    }

    pub fn persisted<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.persisted = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn subclasses<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subclasses = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn discriminator_transform(mut self, transform: DiscriminatorTransform) -> Self {
        self.discriminator_transform = Some(transform);
        self
    }

    pub fn table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }
}
