//! Static declarations of a single-table hierarchy.
//!
//! Developers describe each type with a [`Declaration`]. The [`Builder`]
//! resolves names into an arena of [`TypeDescriptor`]s (the [`Hierarchy`])
//! linked by explicit parent and subclass ids.

mod builder;
pub use builder::Builder;

mod declaration;
pub use declaration::Declaration;

mod descriptor;
pub use descriptor::{DiscriminatorTransform, TypeDescriptor, TypeId, TypeKind};

mod hierarchy;
pub use hierarchy::{Ancestors, Hierarchy};

mod table;
pub use table::{Table, Timestamps};

mod verify;
