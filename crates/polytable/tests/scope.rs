mod fixtures;

use fixtures::*;
use polytable::{row, Discriminator};
use pretty_assertions::assert_eq;

#[test]
fn root_scope_covers_the_whole_hierarchy() {
    let registry = vehicles();
    let scope = registry.scope(id(&registry, "Vehicle")).unwrap();

    assert_eq!(scope.column, "vehicles.type");
    assert_eq!(
        scope.values,
        [
            Discriminator::from("Vehicle"),
            Discriminator::from("motorvehicle"),
            Discriminator::from("car"),
            Discriminator::from("truck"),
            Discriminator::from("taxi"),
            Discriminator::from("bike"),
            Discriminator::from("Taxi"),
        ]
    );
}

#[test]
fn subtype_scope_is_narrower() {
    let registry = vehicles();
    let scope = registry.scope(id(&registry, "Car")).unwrap();

    assert_eq!(scope.values, [Discriminator::from("car")]);
    assert!(scope.matches(&row! { "type" => "car" }));
    assert!(!scope.matches(&row! { "type" => "truck" }));
    assert!(!scope.matches(&row! { "color" => "red" }));
}

#[test]
fn integer_scopes_match_either_shape() {
    let registry = videos();
    let scope = registry.scope(id(&registry, "Video")).unwrap();

    assert_eq!(scope.column, "videos.kind");
    assert!(scope.matches(&row! { "kind" => 1i64 }));
    assert!(scope.matches(&row! { "kind" => "2" }));
    assert!(!scope.matches(&row! { "kind" => 3i64 }));
}

#[test]
fn misdeclared_scope_fails() {
    let registry = misdeclared().lazy(true).build().unwrap();
    assert!(registry
        .scope(id(&registry, "File"))
        .unwrap_err()
        .is_hierarchy_violation());
}
