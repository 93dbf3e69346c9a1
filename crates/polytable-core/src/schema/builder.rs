use super::{Declaration, Hierarchy, Table, TypeDescriptor, TypeId};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Collects declarations and resolves them into a [`Hierarchy`].
#[derive(Debug, Default, Clone)]
pub struct Builder {
    declarations: Vec<Declaration>,
}

impl Builder {
    pub fn declare(&mut self, declaration: Declaration) -> &mut Self {
        self.declarations.push(declaration);
        self
    }

    pub fn build(&self) -> Result<Hierarchy> {
        let mut by_name = IndexMap::with_capacity(self.declarations.len());

        for (index, declaration) in self.declarations.iter().enumerate() {
            if by_name
                .insert(declaration.name.clone(), TypeId(index))
                .is_some()
            {
                return Err(Error::hierarchy_violation(format!(
                    "type `{}` is declared more than once",
                    declaration.name
                )));
            }
        }

        let types = self
            .declarations
            .iter()
            .enumerate()
            .map(|(index, declaration)| resolve(&by_name, TypeId(index), declaration))
            .collect::<Result<Vec<_>>>()?;

        let mut hierarchy = Hierarchy { types, by_name };
        hierarchy.verify()?;
        self.resolve_tables(&mut hierarchy);
        self.verify_discriminator_columns(&hierarchy)?;

        Ok(hierarchy)
    }

    /// Each type uses the table of the nearest ancestor (itself included)
    /// that declares one.
    fn resolve_tables(&self, hierarchy: &mut Hierarchy) {
        // Index based iteration; resolved tables are written back into the
        // arena the ancestors are read from.
        for index in 0..hierarchy.types.len() {
            let id = TypeId(index);
            let table = std::iter::once(id)
                .chain(hierarchy.ancestors(id).map(|ancestor| ancestor.id))
                .find_map(|id| self.declarations[id.0].table.clone())
                .unwrap_or_default();

            hierarchy.types[index].table = table;
        }
    }

    /// A subtype may refine its table's configuration, but every type of a
    /// hierarchy shares one discriminator column.
    fn verify_discriminator_columns(&self, hierarchy: &Hierarchy) -> Result<()> {
        for ty in hierarchy.types() {
            let Some(parent) = ty.parent else { continue };
            if self.declarations[ty.id.0].table.is_none() {
                continue;
            }

            let inherited = &hierarchy.table(parent).discriminator_column;
            if ty.table.discriminator_column != *inherited {
                return Err(Error::hierarchy_violation(format!(
                    "type `{}` stores its discriminator in `{}`, but its parent `{}` uses `{}`",
                    ty.name,
                    ty.table.discriminator_column,
                    hierarchy.get(parent).name,
                    inherited
                )));
            }
        }

        Ok(())
    }
}

fn resolve(
    by_name: &IndexMap<String, TypeId>,
    id: TypeId,
    declaration: &Declaration,
) -> Result<TypeDescriptor> {
    let lookup = |name: &str, role: &str| {
        by_name.get(name).copied().ok_or_else(|| {
            Error::hierarchy_violation(format!(
                "type `{}` names {role} `{name}`, which is not registered",
                declaration.name
            ))
        })
    };

    let parent = declaration
        .parent
        .as_deref()
        .map(|name| lookup(name, "parent"))
        .transpose()?;

    let subclasses = declaration
        .subclasses
        .iter()
        .map(|name| lookup(name, "subclass"))
        .collect::<Result<Vec<_>>>()?;

    Ok(TypeDescriptor {
        id,
        name: declaration.name.clone(),
        parent,
        kind: declaration.kind,
        discriminator: declaration.discriminator.clone(),
        persisted: declaration.persisted.clone(),
        subclasses,
        strict: declaration.strict,
        discriminator_transform: declaration.discriminator_transform,
        table: Table::default(),
    })
}
