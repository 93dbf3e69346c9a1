use super::Value;

use std::fmt;

/// The tag stored in the discriminator column.
///
/// Hierarchies tag their rows either with strings (`"car"`) or integers
/// (`1`), so the tag is a small closed set of scalar shapes that can be used
/// as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Discriminator {
    String(String),
    Int(i64),
}

impl Discriminator {
    /// Reads a tag from a cell. Returns `None` for cells that cannot hold a
    /// tag (null, floats, bytes, ...).
    pub fn from_value(value: &Value) -> Option<Discriminator> {
        match value {
            Value::String(v) => Some(Discriminator::String(v.clone())),
            Value::I64(v) => Some(Discriminator::Int(*v)),
            _ => None,
        }
    }

    /// The same tag in its other shape, when one exists.
    ///
    /// Storage engines frequently hand integers back as strings; `"7"` and
    /// `7` are considered the same tag, but `"07"` is not.
    pub fn alternate(&self) -> Option<Discriminator> {
        match self {
            Discriminator::String(s) => s
                .parse::<i64>()
                .ok()
                .filter(|n| n.to_string() == *s)
                .map(Discriminator::Int),
            Discriminator::Int(n) => Some(Discriminator::String(n.to_string())),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Discriminator::String(s) => Some(s),
            Discriminator::Int(_) => None,
        }
    }

    pub fn to_value(&self) -> Value {
        Value::from(self.clone())
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discriminator::String(s) => f.write_str(s),
            Discriminator::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Discriminator {
    fn from(src: &str) -> Self {
        Discriminator::String(src.to_string())
    }
}

impl From<String> for Discriminator {
    fn from(src: String) -> Self {
        Discriminator::String(src)
    }
}

impl From<i64> for Discriminator {
    fn from(src: i64) -> Self {
        Discriminator::Int(src)
    }
}

impl From<i32> for Discriminator {
    fn from(src: i32) -> Self {
        Discriminator::Int(src.into())
    }
}
