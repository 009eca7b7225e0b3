//! Struct validator behavior: ordering, paths, missing tags, nil handling.

use pretty_assertions::assert_eq;
use schemata_validator::prelude::*;
use schemata_validator::schema;

fn order_schema() -> StructValidator {
    schema! {
        "id" => uint64().positive(),
        "customer" => schema! {
            "name" => string().min(1),
            "age" => uint8().gte(18),
        },
        "note" => string().max(10).optional(),
    }
}

fn order(customer: Record) -> Record {
    Record::new("Order")
        .with_field("id", 0_u64)
        .with_field("customer", customer)
        .with_field("note", None::<String>)
}

#[test]
fn nested_failures_are_flattened_with_dotted_paths() {
    let input = order(Record::new("Customer").with_field("name", "").with_field("age", 12_u8));
    let errors = order_schema().check_tagged(input, "order").unwrap_err();
    assert_eq!(
        errors.all(),
        [
            "<order.customer.age> failed <u8> validation for <Gte(18)>",
            "<order.customer.name> failed <String> validation for <Min(1)>",
            "<order.id> failed <u64> validation for <Positive>",
        ]
    );
}

#[test]
fn untagged_root_uses_bare_child_tags() {
    let input = order(Record::new("Customer").with_field("name", "ada").with_field("age", 30_u8));
    assert_eq!(
        order_schema().check(input).unwrap_err().all(),
        ["<id> failed <u64> validation for <Positive>"]
    );
}

#[test]
fn repeated_validation_is_deterministic() {
    let schema = order_schema();
    let input = order(Record::new("Customer").with_field("name", "").with_field("age", 1_u8));
    let first = schema.check(input.clone()).unwrap_err().joined();
    for _ in 0..32 {
        assert_eq!(schema.check(input.clone()).unwrap_err().joined(), first);
    }
}

#[test]
fn field_declaration_order_does_not_matter() {
    let forward = schema! { "a" => int32().positive(), "b" => int32().positive() };
    let backward = schema! { "b" => int32().positive(), "a" => int32().positive() };
    let record = Record::new("R").with_field("b", -1_i32).with_field("a", -1_i32);
    assert_eq!(
        forward.check(record.clone()).unwrap_err(),
        backward.check(record).unwrap_err()
    );
}

#[test]
fn missing_tag_is_reported_and_stops_the_struct() {
    let schema = schema! {
        "a" => int32().positive(),
        "x" => int32(),
        "z" => int32().positive(),
    };
    let record = Record::new("R").with_field("a", 1_i32).with_field("z", -1_i32);

    let errors = schema.check(record).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.first().contains('x'));
    assert!(errors.first().contains("not found"));
}

#[test]
fn missing_tag_in_nested_struct_uses_full_path() {
    let input = order(Record::new("Customer").with_field("name", "ada"));
    let errors = order_schema().check_tagged(input, "order").unwrap_err();
    assert_eq!(
        errors.all(),
        [
            "tag <order.customer.age> not found for <Struct>",
            "<order.id> failed <u64> validation for <Positive>",
        ]
    );
}

#[test]
fn collect_policy_keeps_scanning() {
    let schema = schema! {
        "a" => int32(),
        "b" => int32().positive(),
        "c" => int32(),
    }
    .missing_tags(MissingTagPolicy::Collect);
    let record = Record::new("R").with_field("b", -5_i32);

    assert_eq!(
        schema.check(record).unwrap_err().all(),
        [
            "tag <a> not found for <Struct>",
            "<b> failed <i32> validation for <Positive>",
            "tag <c> not found for <Struct>",
        ]
    );
}

#[test]
fn nested_nil_struct_is_reported_unless_optional() {
    let required = schema! { "customer" => schema! { "name" => string() } };
    let optional = schema! { "customer" => schema! { "name" => string() }.optional() };
    let record = Record::new("Order").with_field("customer", None::<Record>);

    assert_eq!(
        required.check(record.clone()).unwrap_err().all(),
        ["<customer> failed validation for <Struct>: nil pointer"]
    );
    assert!(optional.check(record).is_ok());
}

#[test]
fn scalar_in_place_of_struct() {
    let schema = schema! { "customer" => schema! { "name" => string() } };
    let record = Record::new("Order").with_field("customer", "ada");
    assert_eq!(
        schema.check(record).unwrap_err().all(),
        ["<customer> failed validation for <Struct>"]
    );
}

#[test]
fn shared_nested_schema() {
    let address = schema! { "zip" => string().min(5).max(5) }.shared();
    let schema = structure()
        .field_shared("billing", address.clone())
        .field_shared("shipping", address);

    let addr = |zip: &str| Record::new("Address").with_field("zip", zip);
    let record = Record::new("Order")
        .with_field("billing", addr("12345"))
        .with_field("shipping", addr("1"));

    assert_eq!(
        schema.check(record).unwrap_err().all(),
        ["<shipping.zip> failed <String> validation for <Min(5)>"]
    );
}
