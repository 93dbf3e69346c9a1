use super::{Error, ErrorKind};

/// Error when an abstract type without a discriminator reaches the write path.
#[derive(Debug)]
pub(super) struct UndeclaredDiscriminator {
    type_name: Box<str>,
}

impl std::error::Error for UndeclaredDiscriminator {}

impl core::fmt::Display for UndeclaredDiscriminator {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "undeclared discriminator: cannot save abstract type {} without a discriminator value",
            self.type_name
        )
    }
}

impl Error {
    /// Creates an undeclared discriminator error.
    pub fn undeclared_discriminator(type_name: impl Into<String>) -> Error {
        Error::from(ErrorKind::UndeclaredDiscriminator(UndeclaredDiscriminator {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error is an undeclared discriminator error.
    pub fn is_undeclared_discriminator(&self) -> bool {
        self.find_kind(|kind| matches!(kind, ErrorKind::UndeclaredDiscriminator(_)).then_some(()))
            .is_some()
    }
}
