//! Cell values and rows exchanged with the storage collaborator.

mod discriminator;
pub use discriminator::Discriminator;

mod row;
pub use row::Row;

mod row_stream;
pub use row_stream::RowStream;

mod value;
pub use value::Value;
