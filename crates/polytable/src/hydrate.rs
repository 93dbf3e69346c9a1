use crate::{Instance, Registry};

use polytable_core::{
    schema::TypeId,
    stmt::{Row, Value},
    Error, Operation, Result,
};

/// Outcome of hydrating a row.
#[derive(Debug, Clone, PartialEq)]
pub enum Hydration {
    /// The row named a type of the hierarchy and was projected onto it.
    Resolved(Instance),

    /// The row carries no discriminator (e.g. a single-column select).
    /// Construction is left to the caller's non-polymorphic default.
    Deferred(Row),
}

impl Hydration {
    pub fn is_deferred(&self) -> bool {
        matches!(self, Hydration::Deferred(_))
    }

    pub fn resolved(self) -> Option<Instance> {
        match self {
            Hydration::Resolved(instance) => Some(instance),
            Hydration::Deferred(_) => None,
        }
    }

    /// The resolved instance, or for a deferred row, the default
    /// construction: an instance of `requested` holding every raw column.
    pub fn into_instance(self, requested: TypeId) -> Instance {
        match self {
            Hydration::Resolved(instance) => instance,
            Hydration::Deferred(row) => Instance::from_storage(requested, row),
        }
    }
}

impl Registry {
    /// Builds an instance of the concrete type a raw row names.
    ///
    /// `requested` is the type the query was issued through. Its hierarchy
    /// is searched for the row's discriminator; the row may name `requested`
    /// itself or any type reachable from it.
    pub fn hydrate(&self, row: Row, requested: TypeId) -> Result<Hydration> {
        let column = &self.hierarchy().table(requested).discriminator_column;

        let tag = match row.get(column) {
            None | Some(Value::Null) => {
                tracing::trace!(
                    requested = %self.descriptor(requested).name,
                    "row has no discriminator; deferring construction"
                );
                return Ok(Hydration::Deferred(row));
            }
            Some(tag) => tag,
        };

        let type_map = self.type_map(requested)?;
        let Some(resolved) = type_map.resolve_value(tag) else {
            return Err(Error::unrecognized_discriminator(column.as_str(), tag.clone()));
        };

        self.project_for_read(resolved, row)
            .map(Hydration::Resolved)
    }

    /// Projects a raw row onto a fresh instance of `ty`.
    ///
    /// Columns outside the allowed set are dropped, except relation
    /// passthrough columns. A strict type rejects the row if any dropped
    /// column holds a non-null value; a wide select naturally yields nulls
    /// for other types' columns and those are not violations.
    pub fn project_for_read(&self, ty: TypeId, mut row: Row) -> Result<Instance> {
        let allowed = self.allowed_columns(ty);

        if !allowed.is_empty() {
            let table = self.hierarchy().table(ty);
            let keep = |column: &str| allowed.contains(column) || table.is_relation_column(column);

            let extra = row
                .iter()
                .filter(|(column, value)| !value.is_null() && !keep(*column))
                .map(|(column, _)| column.to_string())
                .collect::<Vec<_>>();

            let descriptor = self.descriptor(ty);
            if !extra.is_empty() && descriptor.strict {
                return Err(Error::invalid_attributes(
                    &descriptor.name,
                    Operation::Construct,
                    extra,
                ));
            }

            row.retain(|column, _| keep(column));
        }

        Ok(Instance::from_storage(ty, row))
    }
}
