use super::{Error, ErrorKind};
use crate::stmt::Value;

/// Error when a stored discriminator names no type in the hierarchy.
///
/// The row references a type that is no longer declared. Guessing a type
/// would be unsound, so the row is rejected.
#[derive(Debug)]
pub(super) struct UnrecognizedDiscriminator {
    column: Box<str>,
    value: Value,
}

impl std::error::Error for UnrecognizedDiscriminator {}

impl core::fmt::Display for UnrecognizedDiscriminator {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unrecognized discriminator: {}={}",
            self.column, self.value
        )
    }
}

impl Error {
    /// Creates an unrecognized discriminator error.
    pub fn unrecognized_discriminator(column: impl Into<String>, value: Value) -> Error {
        Error::from(ErrorKind::UnrecognizedDiscriminator(
            UnrecognizedDiscriminator {
                column: column.into().into(),
                value,
            },
        ))
    }

    /// Returns `true` if this error is an unrecognized discriminator error.
    pub fn is_unrecognized_discriminator(&self) -> bool {
        self.unrecognized_value().is_some()
    }

    /// The stored value that failed to resolve.
    pub fn unrecognized_value(&self) -> Option<&Value> {
        self.find_kind(|kind| match kind {
            ErrorKind::UnrecognizedDiscriminator(err) => Some(&err.value),
            _ => None,
        })
    }
}
