use super::{Error, ErrorKind};

/// Error when the static type declarations do not form a valid hierarchy.
///
/// This occurs when:
/// - A declared subclass does not extend the declaring type
/// - A parent or subclass name was never registered
/// - A type name is registered twice
/// - A parent chain loops back on itself
/// - Two different types claim the same discriminator value
///
/// These are wiring errors and are expected to abort startup.
#[derive(Debug)]
pub(super) struct HierarchyViolation {
    message: Box<str>,
}

impl std::error::Error for HierarchyViolation {}

impl core::fmt::Display for HierarchyViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "hierarchy violation: {}", self.message)
    }
}

impl Error {
    /// Creates a hierarchy violation error.
    pub fn hierarchy_violation(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::HierarchyViolation(HierarchyViolation {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a hierarchy
    /// violation.
    pub fn is_hierarchy_violation(&self) -> bool {
        self.find_kind(|kind| matches!(kind, ErrorKind::HierarchyViolation(_)).then_some(()))
            .is_some()
    }
}
