#![allow(dead_code)]

use polytable::{Declaration, Discriminator, Model, Registry, Table, TypeId, TypeKind, Value};

pub struct Vehicle;
pub struct MotorVehicle;
pub struct Car;
pub struct Truck;
pub struct Taxi;
pub struct Bike;

impl Model for Vehicle {
    const NAME: &'static str = "Vehicle";

    fn declaration() -> Declaration {
        Declaration::new(Self::NAME)
            .table(Table::new("vehicles"))
            .persisted(["color", "owner_id"])
            .subclasses([MotorVehicle::NAME, Bike::NAME])
    }
}

impl Model for MotorVehicle {
    const NAME: &'static str = "MotorVehicle";

    fn declaration() -> Declaration {
        Declaration::new(Self::NAME)
            .parent(Vehicle::NAME)
            .discriminator("motorvehicle")
            .persisted(["fuel"])
            .subclasses([Car::NAME, Truck::NAME, Taxi::NAME])
    }
}

impl Model for Car {
    const NAME: &'static str = "Car";

    fn declaration() -> Declaration {
        Declaration::new(Self::NAME)
            .parent(MotorVehicle::NAME)
            .discriminator("car")
            .persisted(["capacity"])
    }
}

impl Model for Truck {
    const NAME: &'static str = "Truck";

    fn declaration() -> Declaration {
        Declaration::new(Self::NAME)
            .parent(MotorVehicle::NAME)
            .discriminator("truck")
            .persisted(["payload"])
    }
}

impl Model for Taxi {
    const NAME: &'static str = "Taxi";

    fn declaration() -> Declaration {
        Declaration::new(Self::NAME)
            .parent(MotorVehicle::NAME)
            .discriminator("taxi")
            .persisted(["medallion"])
            .discriminator_transform(capitalize)
    }
}

impl Model for Bike {
    const NAME: &'static str = "Bike";

    fn declaration() -> Declaration {
        Declaration::new(Self::NAME)
            .parent(Vehicle::NAME)
            .discriminator("bike")
            .persisted(["gears"])
            .strict(true)
    }
}

/// Stores string tags with their first letter upper-cased.
pub fn capitalize(tag: &Discriminator) -> Value {
    match tag.as_str() {
        Some(s) => {
            let mut chars = s.chars();
            match chars.next() {
                Some(first) => Value::from(first.to_uppercase().chain(chars).collect::<String>()),
                None => Value::from(""),
            }
        }
        None => tag.to_value(),
    }
}

pub fn vehicles() -> Registry {
    Registry::builder()
        .register::<Vehicle>()
        .register::<MotorVehicle>()
        .register::<Car>()
        .register::<Truck>()
        .register::<Taxi>()
        .register::<Bike>()
        .build()
        .unwrap()
}

/// Integer-tagged hierarchy under an abstract root.
pub fn videos() -> Registry {
    Registry::builder()
        .declare(
            Declaration::new("Video")
                .kind(TypeKind::Abstract)
                .table(Table::new("videos").discriminator_column("kind"))
                .persisted(["title"])
                .subclasses(["Movie", "Episode"]),
        )
        .declare(
            Declaration::new("Movie")
                .parent("Video")
                .discriminator(1i64)
                .persisted(["runtime"]),
        )
        .declare(
            Declaration::new("Episode")
                .parent("Video")
                .discriminator(2i64)
                .persisted(["season"]),
        )
        .build()
        .unwrap()
}

/// `File` lists `Audio` as a subclass, but `Audio` does not extend it.
pub fn misdeclared() -> polytable::registry::Builder {
    let mut builder = Registry::builder();
    builder
        .declare(
            Declaration::new("File")
                .discriminator("file")
                .subclasses(["Audio"]),
        )
        .declare(Declaration::new("Audio").discriminator("audio"));
    builder
}

pub fn id(registry: &Registry, name: &str) -> TypeId {
    registry
        .lookup(name)
        .unwrap_or_else(|| panic!("type `{name}` is not registered"))
}
