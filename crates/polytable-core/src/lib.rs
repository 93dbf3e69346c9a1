#[macro_use]
mod macros;

mod error;
pub use error::{Error, IntoError, Operation};

pub mod schema;
pub use schema::Hierarchy;

pub mod stmt;

/// A Result type alias that uses polytable's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
