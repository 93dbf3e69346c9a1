use polytable_core::schema::Declaration;

/// A type whose declaration is known at compile time.
///
/// ```
/// use polytable::{Declaration, Model};
///
/// struct Vehicle;
/// struct Car;
///
/// impl Model for Vehicle {
///     const NAME: &'static str = "Vehicle";
///
///     fn declaration() -> Declaration {
///         Declaration::new(Self::NAME)
///             .persisted(["color"])
///             .subclasses([Car::NAME])
///     }
/// }
///
/// impl Model for Car {
///     const NAME: &'static str = "Car";
///
///     fn declaration() -> Declaration {
///         Declaration::new(Self::NAME)
///             .parent(Vehicle::NAME)
///             .discriminator("car")
///     }
/// }
/// ```
pub trait Model {
    /// Name the type is registered under.
    const NAME: &'static str;

    /// The static declaration of the type. Defaults to a concrete type with
    /// no parent, no discriminator and no persisted columns.
    fn declaration() -> Declaration {
        Declaration::new(Self::NAME)
    }
}
