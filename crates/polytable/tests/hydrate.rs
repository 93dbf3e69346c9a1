mod fixtures;

use fixtures::*;
use polytable::{row, Hydration, Operation, Value};
use pretty_assertions::assert_eq;

#[test]
fn hydrates_the_concrete_type_named_by_the_row() {
    let registry = vehicles();
    let vehicle = id(&registry, "Vehicle");

    let car = registry
        .hydrate(
            row! {
                "type" => "car",
                "color" => "red",
                "fuel" => "diesel",
                "capacity" => 4,
                "cruft" => "x",
            },
            vehicle,
        )
        .unwrap()
        .resolved()
        .unwrap();

    assert_eq!(car.ty(), id(&registry, "Car"));
    assert!(car.is_a(registry.hierarchy(), vehicle));
    assert_eq!(
        car.attributes(),
        &row! { "type" => "car", "color" => "red", "fuel" => "diesel", "capacity" => 4 }
    );
    assert!(car.exists());
    assert!(!car.is_dirty());
}

#[test]
fn unknown_tags_are_rejected() {
    let registry = vehicles();

    let err = registry
        .hydrate(
            row! { "type" => "unknown", "color" => "red" },
            id(&registry, "Vehicle"),
        )
        .unwrap_err();

    assert!(err.is_unrecognized_discriminator());
    assert_eq!(err.unrecognized_value(), Some(&Value::from("unknown")));
    assert_eq!(err.to_string(), r#"unrecognized discriminator: type="unknown""#);
}

#[test]
fn tags_outside_the_requested_subtree_are_rejected() {
    let registry = vehicles();

    let err = registry
        .hydrate(row! { "type" => "bike" }, id(&registry, "MotorVehicle"))
        .unwrap_err();
    assert!(err.is_unrecognized_discriminator());
}

#[test]
fn missing_or_null_tag_defers_construction() {
    let registry = vehicles();
    let vehicle = id(&registry, "Vehicle");

    let hydration = registry.hydrate(row! { "id" => 3 }, vehicle).unwrap();
    assert_eq!(hydration, Hydration::Deferred(row! { "id" => 3 }));

    let hydration = registry
        .hydrate(row! { "type" => Value::Null, "cruft" => "x" }, vehicle)
        .unwrap();
    assert!(hydration.is_deferred());

    // Default construction keeps every raw column.
    let instance = hydration.into_instance(vehicle);
    assert_eq!(instance.ty(), vehicle);
    assert_eq!(instance.get("cruft"), Some(&Value::from("x")));
}

#[test]
fn strict_types_ignore_nulls_from_wide_selects() {
    let registry = vehicles();

    let bike = registry
        .hydrate(
            row! {
                "id" => 9,
                "type" => "bike",
                "gears" => 21,
                "fuel" => Value::Null,
                "capacity" => Value::Null,
            },
            id(&registry, "Vehicle"),
        )
        .unwrap()
        .resolved()
        .unwrap();

    assert_eq!(bike.ty(), id(&registry, "Bike"));
    assert_eq!(
        bike.attributes(),
        &row! { "id" => 9, "type" => "bike", "gears" => 21 }
    );
}

#[test]
fn strict_types_reject_foreign_values() {
    let registry = vehicles();

    let err = registry
        .hydrate(
            row! { "type" => "bike", "gears" => 21, "fuel" => "diesel", "payload" => 3 },
            id(&registry, "Vehicle"),
        )
        .unwrap_err();

    assert!(err.is_invalid_attributes());
    assert_eq!(err.invalid_attributes_operation(), Some(Operation::Construct));
    assert_eq!(
        err.to_string(),
        "invalid attributes: cannot construct Bike; the attributes fuel, payload are invalid"
    );
}

#[test]
fn relation_columns_pass_through() {
    let registry = vehicles();

    let bike = registry
        .hydrate(
            row! { "type" => "bike", "gears" => 3, "pivot_rider_id" => 12 },
            id(&registry, "Vehicle"),
        )
        .unwrap()
        .resolved()
        .unwrap();

    assert_eq!(bike.get("pivot_rider_id"), Some(&Value::from(12)));
}

#[test]
fn transformed_tags_hydrate() {
    let registry = vehicles();

    let taxi = registry
        .hydrate(row! { "type" => "Taxi", "medallion" => "5X55" }, id(&registry, "Vehicle"))
        .unwrap()
        .resolved()
        .unwrap();

    assert_eq!(taxi.ty(), id(&registry, "Taxi"));
}

#[test]
fn integer_tags_hydrate_from_either_shape() {
    let registry = videos();
    let video = id(&registry, "Video");

    let movie = registry
        .hydrate(row! { "kind" => 1i64, "title" => "Alien" }, video)
        .unwrap()
        .resolved()
        .unwrap();
    assert_eq!(movie.ty(), id(&registry, "Movie"));

    let episode = registry
        .hydrate(row! { "kind" => "2", "season" => 3 }, video)
        .unwrap()
        .resolved()
        .unwrap();
    assert_eq!(episode.ty(), id(&registry, "Episode"));

    // The discriminator column comes from the table, not the default.
    let deferred = registry.hydrate(row! { "type" => 1i64 }, video).unwrap();
    assert!(deferred.is_deferred());
}

#[test]
fn no_declared_columns_keeps_every_column() {
    let registry = polytable::Registry::builder()
        .declare(polytable::Declaration::new("Note"))
        .build()
        .unwrap();
    let note = id(&registry, "Note");

    let instance = registry
        .hydrate(row! { "type" => "Note", "body" => "hi", "extra" => 1 }, note)
        .unwrap()
        .into_instance(note);

    assert_eq!(instance.attributes().len(), 3);
}

#[test]
fn uuid_primary_keys_are_carried_opaquely() {
    let registry = vehicles();
    let key = uuid::Uuid::new_v4();

    let car = registry
        .hydrate(row! { "id" => key, "type" => "car" }, id(&registry, "Vehicle"))
        .unwrap()
        .resolved()
        .unwrap();

    assert_eq!(car.get("id").and_then(Value::as_uuid), Some(&key));
}

#[test]
fn misdeclared_hierarchy_fails_hydration() {
    let registry = misdeclared().lazy(true).build().unwrap();

    let err = registry
        .hydrate(row! { "type" => "audio" }, id(&registry, "File"))
        .unwrap_err();
    assert!(err.is_hierarchy_violation());
}
