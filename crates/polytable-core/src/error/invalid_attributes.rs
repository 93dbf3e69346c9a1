use super::{Error, ErrorKind};

/// The projection that rejected the attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Write path: an instance was about to be persisted.
    Save,

    /// Read path: an instance was being built from a raw row.
    Construct,
}

/// Error when a strict type carries attributes outside its persisted set.
#[derive(Debug)]
pub(super) struct InvalidAttributes {
    type_name: Box<str>,
    operation: Operation,
    attributes: Vec<String>,
}

impl std::error::Error for InvalidAttributes {}

impl core::fmt::Display for InvalidAttributes {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let verb = match self.operation {
            Operation::Save => "save",
            Operation::Construct => "construct",
        };
        write!(
            f,
            "invalid attributes: cannot {verb} {}; the attributes {} are invalid",
            self.type_name,
            self.attributes.join(", ")
        )
    }
}

impl Error {
    /// Creates an invalid attributes error naming every offending column.
    pub fn invalid_attributes(
        type_name: impl Into<String>,
        operation: Operation,
        attributes: Vec<String>,
    ) -> Error {
        Error::from(ErrorKind::InvalidAttributes(InvalidAttributes {
            type_name: type_name.into().into(),
            operation,
            attributes,
        }))
    }

    /// Returns `true` if this error is an invalid attributes error.
    pub fn is_invalid_attributes(&self) -> bool {
        self.invalid_attribute_names().is_some()
    }

    /// The rejected attribute names, if this is an invalid attributes error.
    pub fn invalid_attribute_names(&self) -> Option<&[String]> {
        self.find_kind(|kind| match kind {
            ErrorKind::InvalidAttributes(err) => Some(&err.attributes[..]),
            _ => None,
        })
    }

    /// Which projection rejected the attributes.
    pub fn invalid_attributes_operation(&self) -> Option<Operation> {
        self.find_kind(|kind| match kind {
            ErrorKind::InvalidAttributes(err) => Some(err.operation),
            _ => None,
        })
    }
}
