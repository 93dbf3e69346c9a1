mod fixtures;

use fixtures::*;
use polytable::{Declaration, Instance, Registry, Table};
use pretty_assertions::assert_eq;

use std::sync::Arc;

fn persisted(registry: &Registry, name: &str) -> Vec<String> {
    registry
        .resolve_persisted(id(registry, name))
        .iter()
        .map(String::from)
        .collect()
}

#[test]
fn root_persists_its_own_columns() {
    let registry = vehicles();
    assert_eq!(persisted(&registry, "Vehicle"), ["color", "owner_id"]);
}

#[test]
fn descendants_inherit_ancestor_columns() {
    let registry = vehicles();

    assert_eq!(
        persisted(&registry, "MotorVehicle"),
        ["fuel", "color", "owner_id"]
    );
    assert_eq!(
        persisted(&registry, "Car"),
        ["capacity", "fuel", "color", "owner_id"]
    );
    assert_eq!(
        registry.resolve_persisted(id(&registry, "Car")).sorted(),
        ["capacity", "color", "fuel", "owner_id"]
    );
}

#[test]
fn sibling_columns_do_not_leak() {
    let registry = vehicles();
    let truck = registry.resolve_persisted(id(&registry, "Truck"));

    assert!(truck.contains("payload"));
    assert!(!truck.contains("capacity"));
    assert!(!truck.contains("gears"));
}

#[test]
fn redeclared_columns_appear_once() {
    let registry = Registry::builder()
        .declare(Declaration::new("Base").persisted(["name", "slug"]))
        .declare(
            Declaration::new("Page")
                .parent("Base")
                .discriminator("page")
                .persisted(["slug", "body"]),
        )
        .build()
        .unwrap();

    assert_eq!(persisted(&registry, "Page"), ["slug", "body", "name"]);
}

#[test]
fn allowed_columns_add_structural_columns() {
    let registry = vehicles();
    let car = Instance::new(id(&registry, "Car"));

    assert_eq!(
        registry
            .resolve_instance_persisted(&car)
            .iter()
            .collect::<Vec<_>>(),
        [
            "id",
            "type",
            "created_at",
            "updated_at",
            "capacity",
            "fuel",
            "color",
            "owner_id",
        ]
    );
}

#[test]
fn allowed_columns_follow_table_configuration() {
    let registry = Registry::builder()
        .declare(
            Declaration::new("Asset")
                .table(
                    Table::new("assets")
                        .primary_key("uuid")
                        .discriminator_column("kind")
                        .timestamps(None)
                        .soft_delete("deleted_at")
                        .dates(["purchased_on"]),
                )
                .persisted(["label"]),
        )
        .build()
        .unwrap();

    let allowed = registry.allowed_columns(id(&registry, "Asset"));
    assert_eq!(
        allowed.iter().collect::<Vec<_>>(),
        ["uuid", "kind", "deleted_at", "purchased_on", "label"]
    );
    assert!(!allowed.contains("created_at"));
}

#[test]
fn no_declared_columns_means_no_filtering() {
    let registry = Registry::builder()
        .declare(Declaration::new("Note").subclasses(["Memo"]))
        .declare(Declaration::new("Memo").parent("Note"))
        .build()
        .unwrap();

    let memo = id(&registry, "Memo");
    assert!(registry.resolve_persisted(memo).is_empty());
    assert!(registry.allowed_columns(memo).is_empty());
}

#[test]
fn empty_own_set_still_inherits() {
    let registry = Registry::builder()
        .declare(Declaration::new("Note").persisted(["body"]).subclasses(["Memo"]))
        .declare(Declaration::new("Memo").parent("Note"))
        .build()
        .unwrap();

    assert_eq!(persisted(&registry, "Memo"), ["body"]);
}

#[test]
fn persisted_sets_are_memoised() {
    let registry = vehicles();
    let car = id(&registry, "Car");

    assert!(Arc::ptr_eq(
        &registry.resolve_persisted(car),
        &registry.resolve_persisted(car)
    ));
    assert!(Arc::ptr_eq(
        &registry.allowed_columns(car),
        &registry.allowed_columns(car)
    ));
}
