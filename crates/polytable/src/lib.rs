//! Single-table inheritance for rows produced by an external storage engine.
//!
//! A [`Registry`] owns the static [`Hierarchy`] of a table's types. On the
//! read path it turns a raw [`Row`] into an [`Instance`] of the concrete type
//! named by the row's discriminator, keeping only the columns that type may
//! persist. On the write path it strips disallowed attributes from an
//! instance and stamps its discriminator before the row is stored.
//!
//! ```
//! use polytable::{row, Declaration, Registry, Table};
//!
//! # fn main() -> polytable::Result<()> {
//! let mut builder = Registry::builder();
//! builder
//!     .declare(
//!         Declaration::new("Vehicle")
//!             .table(Table::new("vehicles"))
//!             .persisted(["color"])
//!             .subclasses(["Car"]),
//!     )
//!     .declare(
//!         Declaration::new("Car")
//!             .parent("Vehicle")
//!             .discriminator("car")
//!             .persisted(["capacity"]),
//!     );
//! let registry = builder.build()?;
//!
//! let vehicle = registry.lookup("Vehicle").unwrap();
//! let car = registry
//!     .hydrate(row! { "type" => "car", "color" => "red", "cruft" => "x" }, vehicle)?
//!     .into_instance(vehicle);
//!
//! assert_eq!(car.ty(), registry.lookup("Car").unwrap());
//! assert!(car.get("cruft").is_none());
//! # Ok(())
//! # }
//! ```

pub mod cursor;
pub use cursor::{Cursor, FromCursor};

mod hydrate;
pub use hydrate::Hydration;

mod instance;
pub use instance::Instance;

mod model;
pub use model::Model;

mod persisted;
pub use persisted::PersistedSet;

mod project;

pub mod registry;
pub use registry::Registry;

mod scope;
pub use scope::Scope;

mod type_map;
pub use type_map::TypeMap;

pub use polytable_core::{
    err, row,
    schema::{Declaration, Hierarchy, Table, Timestamps, TypeDescriptor, TypeId, TypeKind},
    stmt::{Discriminator, Row, RowStream, Value},
    Error, Operation, Result,
};
