use crate::{Instance, Registry};

use polytable_core::{
    schema::TypeId,
    stmt::{Row, RowStream},
    Result,
};
use tokio_stream::Stream;

use std::sync::Arc;

/// Hydrates rows as they arrive from the storage collaborator.
///
/// A row that fails to hydrate yields an error item; the cursor keeps going
/// with the next row.
#[derive(Debug)]
pub struct Cursor {
    registry: Arc<Registry>,
    requested: TypeId,
    rows: RowStream,
}

pub trait FromCursor<A>: Extend<A> + Default {}

impl<A, T: Extend<A> + Default> FromCursor<A> for T {}

impl Cursor {
    pub fn new(registry: Arc<Registry>, requested: TypeId, rows: impl Into<RowStream>) -> Cursor {
        Cursor {
            registry,
            requested,
            rows: rows.into(),
        }
    }

    /// The type the query was issued through.
    pub fn requested(&self) -> TypeId {
        self.requested
    }

    pub async fn next(&mut self) -> Option<Result<Instance>> {
        let row = self.rows.next().await?;
        Some(row.and_then(|row| self.hydrate(row)))
    }

    /// Collect all instances, stopping at the first error.
    pub async fn collect<B>(mut self) -> Result<B>
    where
        B: FromCursor<Instance>,
    {
        let mut ret = B::default();

        while let Some(res) = self.next().await {
            ret.extend(Some(res?));
        }

        Ok(ret)
    }

    pub fn into_stream(mut self) -> impl Stream<Item = Result<Instance>> + Send + 'static {
        async_stream::stream! {
            while let Some(res) = self.next().await {
                yield res;
            }
        }
    }

    fn hydrate(&self, row: Row) -> Result<Instance> {
        Ok(self
            .registry
            .hydrate(row, self.requested)?
            .into_instance(self.requested))
    }
}
