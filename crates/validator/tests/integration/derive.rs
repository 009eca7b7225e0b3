//! Field enumeration through `#[derive(Fields)]`.

#![cfg(feature = "derive")]

use pretty_assertions::assert_eq;
use schemata_validator::prelude::*;
use schemata_validator::schema;

#[derive(Debug, Clone, Fields)]
struct Address {
    #[schema(tag = "zip")]
    zip: String,
}

// Untagged fields are never enumerated, so nothing reads them.
#[allow(dead_code)]
#[derive(Debug, Clone, Fields)]
struct User {
    #[schema(tag = "age")]
    age: i64,
    #[schema(tag = "email")]
    email: String,
    #[schema(tag = "address")]
    address: Option<Address>,
    #[schema(tag = "-")]
    password_hash: String,
    #[schema(skip)]
    login_count: u32,
    display_name: String,
}

fn user() -> User {
    User {
        age: 36,
        email: "ada@example.com".into(),
        address: Some(Address { zip: "12345".into() }),
        password_hash: String::new(),
        login_count: 0,
        display_name: "Ada".into(),
    }
}

fn user_schema() -> StructValidator {
    schema! {
        "age" => int64().gte(0).lte(150),
        "email" => string().email(),
        "address" => schema! { "zip" => string().min(5) }.optional(),
    }
}

#[test]
fn derived_fields_skip_untagged_and_sentinel() {
    let tags: Vec<_> = user().fields().into_iter().map(|(tag, _)| tag).collect();
    assert_eq!(tags, ["age", "email", "address"]);
    assert_eq!(user().type_name(), "User");
}

#[test]
fn derived_struct_validates() {
    assert!(user_schema().check(&user()).is_ok());
}

#[test]
fn derived_struct_reports_paths() {
    let mut bad = user();
    bad.age = -1;
    bad.email = "not-an-email".into();
    bad.address = Some(Address { zip: "1".into() });

    assert_eq!(
        user_schema().check_tagged(&bad, "user").unwrap_err().all(),
        [
            "<user.address.zip> failed <String> validation for <Min(5)>",
            "<user.age> failed <i64> validation for <Gte(0)>",
            "<user.email> failed <String> validation for <Email>",
        ]
    );
}

#[test]
fn absent_optional_nested_struct() {
    let mut u = user();
    u.address = None;
    assert!(user_schema().check(u).is_ok());
}

#[test]
fn schema_cannot_see_hidden_fields() {
    let schema = schema! { "-" => string() };
    let errors = schema.check(&user()).unwrap_err();
    assert_eq!(errors.all(), ["tag <-> not found for <Struct>"]);
}

#[test]
fn pointer_to_derived_struct() {
    assert!(user_schema().check(Box::new(user())).is_ok());
    assert!(user_schema().check(None::<User>).is_err());
    assert!(user_schema().optional().check(None::<User>).is_ok());
}

#[derive(Debug, Clone, Fields)]
struct Labeled<T> {
    #[schema(tag = "label")]
    label: String,
    #[schema(tag = "value")]
    value: T,
}

#[test]
fn generic_derived_struct() {
    let schema = schema! {
        "label" => string().min(1),
        "value" => uint16().lt(100),
    };
    let item = Labeled { label: "port".into(), value: 8080_u16 };
    assert_eq!(
        schema.check(&item).unwrap_err().all(),
        ["<value> failed <u16> validation for <Lt(100)>"]
    );
    assert!(schema.check(Labeled { label: "n".into(), value: 7_u16 }).is_ok());
}
