//! Whole-schema validation of realistic inputs.

use pretty_assertions::assert_eq;
use schemata_validator::json::validate_json;
use schemata_validator::prelude::*;
use schemata_validator::schema;
use serde_json::json;

fn user_schema() -> StructValidator {
    schema! {
        "age" => int64().gte(0).lte(150),
        "email" => string().email(),
    }
}

#[test]
fn two_bad_fields_yield_two_path_qualified_messages() {
    let input = Record::new("User")
        .with_field("age", -1_i64)
        .with_field("email", "not-an-email");

    let errors = user_schema().check(input).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert!(errors.all()[0].contains("age"));
    assert!(errors.all()[1].contains("email"));
    insta::assert_snapshot!(
        errors.joined(),
        @"<age> failed <i64> validation for <Gte(0)> | <email> failed <String> validation for <Email>"
    );
}

#[test]
fn same_schema_from_json_payload() {
    let payload = json!({ "age": -1, "email": "not-an-email" });
    let errors = validate_json(&user_schema(), &payload, Some("user")).unwrap_err();
    insta::assert_snapshot!(
        serde_json::to_string(&errors).unwrap(),
        @r#"["<user.age> failed <i64> validation for <Gte(0)>","<user.email> failed <String> validation for <Email>"]"#
    );
}

#[test]
fn valid_payload_passes() {
    let payload = json!({ "age": 36, "email": "ada@example.com", "extra": [1, 2, 3] });
    assert!(validate_json(&user_schema(), &payload, None).is_ok());
}

#[test]
fn signup_form_with_custom_messages() {
    let signup = schema! {
        "username" => string()
            .min(3).with_message("username is too short")
            .max(16).with_message("username is too long")
            .regex("^[a-z0-9_]+$").unwrap().with_message("username has invalid characters"),
        "password" => string().min(12),
        "terms" => boolean().is_true().with_message("terms must be accepted"),
        "plan" => string().one_of(["free", "pro"]),
    };

    let input = Record::new("Signup")
        .with_field("username", "A")
        .with_field("password", "hunter2")
        .with_field("terms", false)
        .with_field("plan", "enterprise");

    let errors = signup.check_tagged(input, "signup").unwrap_err();
    assert_eq!(
        errors.all(),
        [
            "<signup.password> failed <String> validation for <Min(12)>",
            r#"<signup.plan> failed <String> validation for <In(["free", "pro"])>"#,
            "terms must be accepted",
            "username is too short",
            "username has invalid characters",
        ]
    );
}

#[test]
fn error_set_is_a_std_error() {
    fn run() -> Result<(), Box<dyn std::error::Error>> {
        int8().positive().check(0_i8)?;
        Ok(())
    }
    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "failed <i8> validation for <Positive>");
}
