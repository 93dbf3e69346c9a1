use crate::{Instance, Registry};

use polytable_core::schema::TypeId;

use indexmap::IndexSet;
use std::sync::Arc;

/// Columns a type is entitled to read and write.
///
/// An empty set is meaningful: it means no filtering is configured for the
/// type, not that nothing may be persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PersistedSet {
    columns: IndexSet<String>,
}

impl PersistedSet {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.columns.iter().map(String::as_str)
    }

    /// Columns sorted by name, for stable comparisons.
    pub fn sorted(&self) -> Vec<&str> {
        let mut columns = self.iter().collect::<Vec<_>>();
        columns.sort_unstable();
        columns
    }
}

impl<S: Into<String>> FromIterator<S> for PersistedSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        PersistedSet {
            columns: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Registry {
    /// Columns declared by `ty` and all of its ancestors.
    pub fn resolve_persisted(&self, ty: TypeId) -> Arc<PersistedSet> {
        self.persisted
            .get_or_init(ty, || {
                let descriptor = self.descriptor(ty);
                let mut columns = descriptor.persisted.iter().cloned().collect::<IndexSet<_>>();

                if let Some(parent) = descriptor.parent {
                    columns.extend(self.resolve_persisted(parent).iter().map(String::from));
                }

                tracing::debug!(ty = %descriptor.name, columns = columns.len(), "resolved persisted set");
                Arc::new(PersistedSet { columns })
            })
            .clone()
    }

    /// Columns an instance of `ty` may carry: the declared set plus the
    /// table's primary key, discriminator and temporal columns.
    ///
    /// Empty when the declared set is empty, meaning "do not filter".
    pub fn allowed_columns(&self, ty: TypeId) -> Arc<PersistedSet> {
        self.allowed
            .get_or_init(ty, || {
                let declared = self.resolve_persisted(ty);
                if declared.is_empty() {
                    return Arc::new(PersistedSet::default());
                }

                let table = self.hierarchy().table(ty);
                let columns = table
                    .structural_columns()
                    .chain(declared.iter())
                    .map(String::from)
                    .collect();

                Arc::new(PersistedSet { columns })
            })
            .clone()
    }

    /// [`allowed_columns`](Self::allowed_columns) for the instance's type.
    pub fn resolve_instance_persisted(&self, instance: &Instance) -> Arc<PersistedSet> {
        self.allowed_columns(instance.ty())
    }
}
