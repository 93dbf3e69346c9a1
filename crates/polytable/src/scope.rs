use crate::Registry;

use polytable_core::{
    schema::TypeId,
    stmt::{Discriminator, Row},
    Result,
};

/// Restricts a query issued through a type to rows of that type and its
/// declared subtypes.
///
/// The storage collaborator renders it as `column IN (values)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Discriminator column qualified with the table name.
    pub column: String,

    /// Every tag a matching row may carry, stored aliases included.
    pub values: Vec<Discriminator>,

    discriminator_column: String,
}

impl Scope {
    /// Returns `true` if `row` would be selected by the scope.
    pub fn matches(&self, row: &Row) -> bool {
        let Some(tag) = row
            .get(&self.discriminator_column)
            .and_then(Discriminator::from_value)
        else {
            return false;
        };

        self.values.contains(&tag)
            || tag
                .alternate()
                .is_some_and(|alternate| self.values.contains(&alternate))
    }
}

impl Registry {
    /// The scope applied to queries issued through `ty`.
    pub fn scope(&self, ty: TypeId) -> Result<Scope> {
        let type_map = self.type_map(ty)?;
        let table = self.hierarchy().table(ty);

        let values = type_map
            .discriminators()
            .chain(type_map.aliases())
            .cloned()
            .collect();

        Ok(Scope {
            column: table.qualified_discriminator_column(),
            values,
            discriminator_column: table.discriminator_column.clone(),
        })
    }
}
